//! Terminal starfield runner (default binary).
//!
//! Draws blinking stars and a steerable rocket with a cooperative
//! scheduler: every tick polls the keyboard, resumes each task once,
//! flushes the framebuffer and sleeps for the configured interval.

use std::fs::File;
use std::thread;

use anyhow::Result;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tui_starfield::assets::load_rocket_frames;
use tui_starfield::config::StarfieldConfig;
use tui_starfield::core::{Canvas, SimpleRng, SpriteFrame};
use tui_starfield::input::ControlsReader;
use tui_starfield::scene::build_scene;
use tui_starfield::term::{FrameBuffer, TerminalRenderer};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = StarfieldConfig::from_env();
    init_logging(&config);

    // Frames are loaded before the terminal is touched so a bad path
    // reports a plain error.
    let frames = load_rocket_frames(&config.frames_dir)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, frames);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!("starfield stopped");
    result
}

fn init_logging(config: &StarfieldConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("starfield starting up with {config:?}");
}

fn run(
    term: &mut TerminalRenderer,
    config: &StarfieldConfig,
    frames: Vec<SpriteFrame>,
) -> Result<()> {
    let (rows, columns) = term.size()?;
    let mut fb = FrameBuffer::new(columns, rows);

    let seed = config.seed_or_clock();
    log::info!("canvas {rows}x{columns}, seed {seed}");
    let mut rng = SimpleRng::new(seed);
    let mut scheduler = build_scene(config, fb.interior(), frames, &mut rng);
    let mut reader = ControlsReader::new();

    loop {
        let polled = reader.poll()?;
        if polled.quit {
            return Ok(());
        }

        let report = scheduler.tick(&mut fb, polled.controls);
        if report.finished > 0 || report.spawned > 0 {
            log::debug!("{report:?}");
        }

        term.draw(&mut fb)?;
        thread::sleep(config.tick_timeout);
    }
}
