//! One harness run: build a screen, render frames, write artefacts, report.

use std::collections::BTreeMap;

use emu_core::{Observable, Value};
use serde::Serialize;
use sinclair_screen::MemoryScreen;

use crate::VerifyError;
use crate::config::VerifyConfig;
use crate::demo::Demo;
use crate::info::ScreenInfo;
use crate::listing::sine_table_asm;
use crate::preview::ansi_preview;
use crate::scr::{read_scr, write_scr};
use crate::sink::{DisplaySink, PngSink, SequenceSink};

#[derive(Serialize)]
struct Report<'a> {
    info: ScreenInfo,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    queries: BTreeMap<&'a str, Option<Value>>,
}

/// Carry out everything `config` asks for.
///
/// # Errors
///
/// Fails if a dump cannot be read or written, a PNG cannot be encoded, the
/// window cannot be opened, or the JSON report cannot be serialised.
pub fn run(config: &VerifyConfig) -> Result<(), VerifyError> {
    if config.sine_table {
        print!("{}", sine_table_asm());
        return Ok(());
    }

    let (mut screen, demo) = match &config.scr_path {
        Some(path) => (read_scr(path)?, None),
        None => (MemoryScreen::new(), Some(config.demo)),
    };

    if config.window {
        screen = show_window(screen, demo, config.scale)?;
    } else {
        render_frames(&mut screen, demo, config)?;
    }

    if let Some(path) = &config.save_scr_path {
        write_scr(&screen, path)?;
    }

    report(&screen, config)
}

fn render_frames(
    screen: &mut MemoryScreen,
    demo: Option<Demo>,
    config: &VerifyConfig,
) -> Result<(), VerifyError> {
    let mut record = match &config.record_dir {
        Some(dir) => Some(SequenceSink::new(dir, config.scale)?),
        None => None,
    };

    let frames = config.frames.max(1);
    for step in 0..frames {
        if let Some(demo) = demo {
            demo.draw(screen, step);
        }
        let frame = screen.render();
        if let Some(sink) = record.as_mut() {
            sink.present(frame)?;
        }
    }
    log::info!("Rendered {frames} frame(s)");

    if let Some(sink) = &record {
        log::info!("Recorded {} frames", sink.written());
    }
    if let Some(path) = &config.screenshot_path {
        PngSink::new(path, config.scale).present(screen.frame())?;
    }
    Ok(())
}

#[cfg(feature = "native")]
fn show_window(
    screen: MemoryScreen,
    demo: Option<Demo>,
    scale: u32,
) -> Result<MemoryScreen, VerifyError> {
    crate::window::run_window(screen, demo, scale)
}

#[cfg(not(feature = "native"))]
fn show_window(
    _screen: MemoryScreen,
    _demo: Option<Demo>,
    _scale: u32,
) -> Result<MemoryScreen, VerifyError> {
    Err(VerifyError::Usage(
        "--window needs the `native` feature".to_string(),
    ))
}

fn report(screen: &MemoryScreen, config: &VerifyConfig) -> Result<(), VerifyError> {
    if config.json {
        let report = Report {
            info: ScreenInfo::from_screen(screen),
            queries: config
                .queries
                .iter()
                .map(|path| (path.as_str(), screen.query(path)))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(mode) = config.preview {
        print!("{}", ansi_preview(screen, mode));
    }
    if config.info {
        println!("{}", ScreenInfo::from_screen(screen));
    }
    for path in &config.queries {
        match screen.query(path) {
            Some(value) => println!("{path} = {value}"),
            None => println!("{path}: no such path (try {})", screen.query_paths().join(", ")),
        }
    }
    Ok(())
}
