//! End-to-end runs of the harness. Artefacts go to a per-test directory under
//! the system temp dir and are removed afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use emu_core::{Observable, Value};
use sinclair_screen::{MemoryScreen, PIXEL_BYTES, SCREEN_BYTES};
use zx_verify::scr::{DEFAULT_ATTR, read_scr, write_scr};
use zx_verify::{Demo, Preview, ScrError, VerifyConfig, VerifyError, ansi_preview, run};

fn output_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("zx-verify-it-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create output dir");
    dir
}

fn png_size(path: &Path) -> (u32, u32) {
    let decoder = png::Decoder::new(fs::File::open(path).expect("open png"));
    let reader = decoder.read_info().expect("png header");
    (reader.info().width, reader.info().height)
}

#[test]
fn scr_round_trip() {
    let dir = output_dir("roundtrip");
    let path = dir.join("cube.scr");

    let mut screen = MemoryScreen::new();
    Demo::Cube.draw(&mut screen, 7);
    write_scr(&screen, &path).expect("write scr");
    assert_eq!(fs::metadata(&path).expect("stat").len(), SCREEN_BYTES as u64);

    let loaded = read_scr(&path).expect("read scr");
    assert_eq!(loaded.as_bytes(), screen.as_bytes());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn headless_run_writes_every_artefact() {
    let dir = output_dir("headless");
    let config = VerifyConfig {
        demo: Demo::Flash,
        frames: 4,
        scale: 2,
        screenshot_path: Some(dir.join("last.png")),
        record_dir: Some(dir.join("frames")),
        save_scr_path: Some(dir.join("final.scr")),
        ..VerifyConfig::default()
    };
    run(&config).expect("run");

    assert_eq!(png_size(&dir.join("last.png")), (512, 384));
    assert_eq!(png_size(&dir.join("frames/000001.png")), (512, 384));
    assert!(dir.join("frames/000004.png").exists());
    assert!(!dir.join("frames/000005.png").exists());

    let saved = read_scr(&dir.join("final.scr")).expect("read saved scr");
    assert_eq!(saved.query("attr.0.0.flash"), Some(Value::Bool(true)));
    assert_eq!(saved.query("attr.1.0.flash"), Some(Value::Bool(false)));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn pixel_only_dump_runs_with_default_attributes() {
    let dir = output_dir("pixels");
    let input = dir.join("in.scr");
    let mut data = vec![0u8; PIXEL_BYTES];
    data[0] = 0x80;
    fs::write(&input, &data).expect("write input");

    let config = VerifyConfig {
        scr_path: Some(input),
        save_scr_path: Some(dir.join("out.scr")),
        ..VerifyConfig::default()
    };
    run(&config).expect("run");

    let out = fs::read(dir.join("out.scr")).expect("read output");
    assert_eq!(out.len(), SCREEN_BYTES);
    assert_eq!(out[0], 0x80);
    assert!(out[PIXEL_BYTES..].iter().all(|&a| a == DEFAULT_ATTR));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn bad_dump_size_is_reported() {
    let dir = output_dir("bad");
    let input = dir.join("short.scr");
    fs::write(&input, [0u8; 10]).expect("write input");

    let config = VerifyConfig {
        scr_path: Some(input),
        ..VerifyConfig::default()
    };
    match run(&config) {
        Err(VerifyError::Scr(e)) => assert_eq!(e, ScrError::InvalidSize(10)),
        other => panic!("expected a dump size error, got {other:?}"),
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_dump_is_an_io_error() {
    let config = VerifyConfig {
        scr_path: Some(PathBuf::from("/nonexistent/zx-verify/none.scr")),
        ..VerifyConfig::default()
    };
    assert!(matches!(run(&config), Err(VerifyError::Io(_))));
}

#[test]
fn query_values_serialise_untagged() {
    let mut screen = MemoryScreen::new();
    Demo::Attrs.draw(&mut screen, 0);
    let ink = screen.query("attr.3.2.ink");
    let flash = screen.query("flash");
    let missing = screen.query("attr.99.0");
    assert_eq!(serde_json::to_string(&ink).expect("json"), "3");
    assert_eq!(serde_json::to_string(&flash).expect("json"), "false");
    assert_eq!(serde_json::to_string(&missing).expect("json"), "null");
}

#[test]
fn preview_run_matches_screen() {
    let config = VerifyConfig {
        demo: Demo::Attrs,
        preview: Some(Preview::Attrs),
        ..VerifyConfig::default()
    };
    run(&config).expect("run");

    let mut screen = MemoryScreen::new();
    Demo::Attrs.draw(&mut screen, 0);
    let text = ansi_preview(&screen, Preview::Attrs);
    assert_eq!(text.lines().count(), 96);
    assert!(text.lines().all(|line| line.ends_with("\x1b[0m")));
}
