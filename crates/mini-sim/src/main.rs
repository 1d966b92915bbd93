// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! mini-sim: run a saved scene headless for a number of ticks.
//!
//! Scenes are JSON files in the platform config dir (or `--dir`). Draw calls
//! go to a renderer that only logs, so the run can be inspected with
//! `--log trace`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mini_app_core::{SceneConfig, SceneService};
use mini_config_fs::FsSceneStore;
use mini_core::{Image, Rect, Renderer, ScreenPoint, Stage};
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless Mini scene runner")]
struct Args {
    /// Scene name (file stem under the scene directory)
    #[arg(long, default_value = "demo")]
    scene: String,
    /// Scene directory; defaults to the platform config dir
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Number of fixed steps to run
    #[arg(long, default_value_t = 120)]
    ticks: u64,
    /// Log filter (overrides RUST_LOG), e.g. `mini_core=trace`
    #[arg(long)]
    log: Option<String>,
    /// Write the built-in demo scene under `--scene` before running
    #[arg(long)]
    write_default: bool,
}

/// Renderer that records blits as trace events.
#[derive(Debug, Default)]
struct TraceRenderer {
    blits: usize,
}

impl Renderer for TraceRenderer {
    fn blit(&mut self, image: &Image, section: Option<Rect>, dest: ScreenPoint) {
        self.blits += 1;
        trace!(image = image.key.0, ?section, x = dest.x, y = dest.y, "blit");
    }
}

fn init_tracing(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(f) => EnvFilter::try_new(f).with_context(|| format!("invalid log filter {f:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn run(stage: &mut Stage, ticks: u64, renderer: &mut TraceRenderer) {
    for _ in 0..ticks {
        stage.tick();
        stage.draw(renderer);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref())?;

    let store = match &args.dir {
        Some(dir) => FsSceneStore::at(dir),
        None => FsSceneStore::new(),
    }
    .context("opening scene store")?;
    info!(dir = %store.base().display(), "scene store");
    let svc = SceneService::new(store);

    if args.write_default {
        svc.save_scene(&args.scene, &SceneConfig::demo())
            .with_context(|| format!("writing scene {:?}", args.scene))?;
    }

    let mut stage = svc.load_stage(&args.scene).with_context(|| {
        format!(
            "loading scene {:?} (use --write-default to create the demo scene)",
            args.scene
        )
    })?;

    let mut renderer = TraceRenderer::default();
    run(&mut stage, args.ticks, &mut renderer);

    for (i, body) in stage.bodies().iter().enumerate() {
        let p = body.entity().position();
        info!(body = i, x = p.x, y = p.y, contacts = body.contacts().count(), "final position");
    }
    info!(ticks = stage.tick_count(), blits = renderer.blits, "done");
    Ok(())
}
