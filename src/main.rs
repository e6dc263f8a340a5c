//! Interactive maze walker (default binary).
//!
//! Runs the raycasting pipeline once per virtual frame into an in-memory
//! screen and shows it through the diffing terminal renderer.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use raymaze::core::{apply_motion, assets, Engine, ScreenMemory};
use raymaze::input::{handle_key_event, should_quit};
use raymaze::term::{
    Density, FrameBuffer, HudStatus, ScreenView, TermConfig, TerminalRenderer, Viewport,
};

fn main() -> Result<()> {
    let config = TermConfig::from_env();
    init_tracing(&config)?;
    tracing::info!(?config, "starting raymaze");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => tracing::info!("raymaze exited"),
        Err(err) => tracing::error!(error = %err, "raymaze failed"),
    }
    result
}

/// Log to `RAYMAZE_LOG_PATH` when set; stdout belongs to the screen.
fn init_tracing(config: &TermConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {path}"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &TermConfig) -> Result<()> {
    let world = assets::standard_world()?;
    let mut engine = Engine::new();
    let mut screen = ScreenMemory::new(config.row_table());
    let mut pose = assets::START_POSE;

    let mut fb = FrameBuffer::new(0, 0);
    let frame_interval = config.frame_interval();
    let mut next_frame = Instant::now();

    loop {
        // Frame boundary: one full pipeline pass, then flush the view.
        let stats = engine.render_frame(&world, &pose, &mut screen);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let view = ScreenView::new(Density::fit(viewport)).with_color(config.color);
        let hud = HudStatus { pose, stats };
        view.render_into(&screen, Some(&hud), viewport, &mut fb);
        let written = term.draw_swap(&mut fb)?;
        tracing::trace!(frame = stats.frame, bytes = written, "terminal flushed");

        // Input until the next frame boundary.
        next_frame += frame_interval;
        loop {
            let timeout = next_frame
                .checked_duration_since(Instant::now())
                .unwrap_or(Duration::ZERO);
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_motion(&mut pose, action, &world);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Don't try to catch up after a stall.
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }
    }
}
