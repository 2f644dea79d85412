//! Command-line configuration.

use std::path::PathBuf;

use sinclair_screen::MAX_SCALE;

use crate::VerifyError;
use crate::demo::Demo;
use crate::preview::Preview;

pub const USAGE: &str = "\
Usage: zx-verify [OPTIONS]

Options:
  --scr <file>         Load a .scr dump (6912 or 6144 bytes) instead of a demo
  --demo <name>        Demo scene: cube, lines, attrs, flash [default: cube]
  --frames <n>         Number of frames to render [default: 1]
  --scale <n>          PNG/window scale factor, 1-16 [default: 3]
  --screenshot <file>  Save the last frame as a PNG
  --record <dir>       Save every frame as a numbered PNG
  --save-scr <file>    Save the final screen memory as a .scr dump
  --info               Print screen statistics
  --json               Print statistics and queries as JSON
  --query <path>       Print an observable value (repeatable), e.g. attr.0.0.ink
  --preview <mode>     Print the screen as ANSI half blocks: pixels, attrs
  --sine-table         Print the sine table as Z80 assembly and exit
  --window             Show the screen in a window (50 Hz)
  -h, --help           Print this help";

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    pub scr_path: Option<PathBuf>,
    pub demo: Demo,
    pub frames: u32,
    pub scale: u32,
    pub screenshot_path: Option<PathBuf>,
    pub record_dir: Option<PathBuf>,
    pub save_scr_path: Option<PathBuf>,
    pub info: bool,
    pub json: bool,
    pub queries: Vec<String>,
    pub preview: Option<Preview>,
    pub sine_table: bool,
    pub window: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            scr_path: None,
            demo: Demo::Cube,
            frames: 1,
            scale: 3,
            screenshot_path: None,
            record_dir: None,
            save_scr_path: None,
            info: false,
            json: false,
            queries: Vec::new(),
            preview: None,
            sine_table: false,
            window: false,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(VerifyConfig),
    Help,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, VerifyError> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| VerifyError::Usage(format!("{flag} needs a value")))
}

fn number(args: &[String], i: usize, flag: &str) -> Result<u32, VerifyError> {
    let s = value(args, i, flag)?;
    s.parse()
        .map_err(|_| VerifyError::Usage(format!("{flag}: not a number: {s}")))
}

/// Parse arguments, excluding the program name.
///
/// # Errors
///
/// Returns [`VerifyError::Usage`] for unknown flags, missing values, bad
/// numbers, an unknown demo or preview name, or `--preview` with `--json`.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, VerifyError> {
    let args: Vec<String> = args.into_iter().collect();
    let mut cfg = VerifyConfig::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--scr" => {
                i += 1;
                cfg.scr_path = Some(PathBuf::from(value(&args, i, flag)?));
            }
            "--demo" => {
                i += 1;
                cfg.demo = value(&args, i, flag)?.parse()?;
            }
            "--frames" => {
                i += 1;
                cfg.frames = number(&args, i, flag)?;
            }
            "--scale" => {
                i += 1;
                let scale = number(&args, i, flag)?;
                if !(1..=MAX_SCALE).contains(&scale) {
                    return Err(VerifyError::Usage(format!(
                        "{flag}: {scale} is out of range (1-{MAX_SCALE})"
                    )));
                }
                cfg.scale = scale;
            }
            "--screenshot" => {
                i += 1;
                cfg.screenshot_path = Some(PathBuf::from(value(&args, i, flag)?));
            }
            "--record" => {
                i += 1;
                cfg.record_dir = Some(PathBuf::from(value(&args, i, flag)?));
            }
            "--save-scr" => {
                i += 1;
                cfg.save_scr_path = Some(PathBuf::from(value(&args, i, flag)?));
            }
            "--query" => {
                i += 1;
                cfg.queries.push(value(&args, i, flag)?.to_string());
            }
            "--preview" => {
                i += 1;
                cfg.preview = Some(value(&args, i, flag)?.parse()?);
            }
            "--info" => cfg.info = true,
            "--json" => cfg.json = true,
            "--sine-table" => cfg.sine_table = true,
            "--window" => cfg.window = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(VerifyError::Usage(format!("Unknown argument: {other}"))),
        }
        i += 1;
    }

    if cfg.json && cfg.preview.is_some() {
        return Err(VerifyError::Usage(
            "--preview writes text and cannot be combined with --json".to_string(),
        ));
    }

    Ok(Command::Run(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, VerifyError> {
        parse_args(args.iter().map(|s| (*s).to_string()))
    }

    fn config(args: &[&str]) -> VerifyConfig {
        match parse(args) {
            Ok(Command::Run(cfg)) => cfg,
            other => panic!("expected a run config, got {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg, VerifyConfig::default());
        assert_eq!(cfg.demo, Demo::Cube);
        assert_eq!(cfg.frames, 1);
        assert_eq!(cfg.scale, 3);
    }

    #[test]
    fn all_flags() {
        let cfg = config(&[
            "--demo",
            "flash",
            "--frames",
            "64",
            "--scale",
            "2",
            "--screenshot",
            "out.png",
            "--record",
            "frames",
            "--save-scr",
            "out.scr",
            "--info",
            "--json",
            "--query",
            "frame_count",
            "--query",
            "attr.0.0",
            "--window",
        ]);
        assert_eq!(cfg.demo, Demo::Flash);
        assert_eq!(cfg.frames, 64);
        assert_eq!(cfg.scale, 2);
        assert_eq!(cfg.screenshot_path, Some(PathBuf::from("out.png")));
        assert_eq!(cfg.record_dir, Some(PathBuf::from("frames")));
        assert_eq!(cfg.save_scr_path, Some(PathBuf::from("out.scr")));
        assert!(cfg.info && cfg.json && cfg.window);
        assert_eq!(cfg.queries, vec!["frame_count", "attr.0.0"]);
    }

    #[test]
    fn scale_must_be_in_range() {
        assert_eq!(config(&["--scale", "1"]).scale, 1);
        assert_eq!(config(&["--scale", "16"]).scale, MAX_SCALE);
        for bad in ["0", "17", "200"] {
            assert!(
                matches!(parse(&["--scale", bad]), Err(VerifyError::Usage(_))),
                "--scale {bad}"
            );
        }
    }

    #[test]
    fn preview_modes() {
        assert_eq!(config(&[]).preview, None);
        assert_eq!(config(&["--preview", "attrs"]).preview, Some(Preview::Attrs));
        assert_eq!(
            config(&["--info", "--preview", "pixels"]).preview,
            Some(Preview::Pixels)
        );
        assert!(matches!(parse(&["--preview"]), Err(VerifyError::Usage(_))));
        assert!(matches!(
            parse(&["--preview", "sixel"]),
            Err(VerifyError::Usage(_))
        ));
        assert!(matches!(
            parse(&["--json", "--preview", "pixels"]),
            Err(VerifyError::Usage(_))
        ));
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["--frames", "5", "-h"]).ok(), Some(Command::Help));
    }

    #[test]
    fn errors() {
        assert!(matches!(parse(&["--bogus"]), Err(VerifyError::Usage(_))));
        assert!(matches!(parse(&["--frames"]), Err(VerifyError::Usage(_))));
        assert!(matches!(parse(&["--frames", "x"]), Err(VerifyError::Usage(_))));
        assert!(matches!(parse(&["--demo", "teapot"]), Err(VerifyError::Usage(_))));
    }
}
