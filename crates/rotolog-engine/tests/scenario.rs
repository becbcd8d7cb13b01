//! End-to-end scenario: mixed-level writes across several rotations

use std::fs;
use std::path::Path;

use rotolog_core::{Level, LogConfig};
use rotolog_engine::{rotated_path, LogWriter};
use tempfile::TempDir;

fn pick_level(i: u32) -> Level {
    if i == 0 || i == 256 {
        Level::Error
    } else if i.is_power_of_two() {
        Level::Warning
    } else if i % 10 == 0 {
        Level::Default
    } else if i % 2 == 0 {
        Level::Info
    } else {
        Level::Debug
    }
}

fn run_scenario(writer: &mut LogWriter) {
    writer.log("logging squares of 0..=256").unwrap();
    for i in 0u32..=256 {
        let level = pick_level(i);
        if level == Level::Default {
            writer.write_break().unwrap();
        }
        writer
            .log_at(level, &format!("{}^2 = {}", i, (i as u64) * (i as u64)))
            .unwrap();
    }
}

/// All lines from the active file plus every existing backup.
fn collect_lines(base: &Path, max_backups: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for i in (1..=max_backups).rev() {
        let backup = rotated_path(base, i);
        if backup.exists() {
            let content = fs::read_to_string(&backup).unwrap();
            lines.extend(content.lines().map(str::to_string));
        }
    }
    let content = fs::read_to_string(base).unwrap();
    lines.extend(content.lines().map(str::to_string));
    lines
}

#[test]
fn test_mixed_level_scenario() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenario.log");

    let mut config = LogConfig::default();
    config.set_path(&path);
    config.set_max_size(4096);
    config.set_max_backups(5);
    config.set_verbosity(4);
    let mut writer = LogWriter::new(config);

    run_scenario(&mut writer);

    let lines = collect_lines(&path, 5);

    // 257 value records plus the leading summary record.
    let records = lines.iter().filter(|l| l.starts_with('<')).count();
    assert_eq!(records, 258);

    // One dashed rule per multiple of ten in 10..=250.
    let rules = lines
        .iter()
        .filter(|l| l.as_str() == "-".repeat(80))
        .count();
    assert_eq!(rules, 25);

    // Rotation actually happened: total content exceeds one threshold.
    assert!(rotated_path(&path, 1).exists());
    // Backups stay within the retention bound.
    assert!(!rotated_path(&path, 6).exists());

    // Level tags land where the scenario assigns them.
    assert!(lines.iter().any(|l| l.starts_with("<ERR") && l.ends_with("0^2 = 0")));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("<ERR") && l.ends_with("256^2 = 65536")));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("<WAR") && l.ends_with("128^2 = 16384")));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("<DEF") && l.ends_with("250^2 = 62500")));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("<INF") && l.ends_with("6^2 = 36")));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("<DEB") && l.ends_with("7^2 = 49")));
}

#[test]
fn test_scenario_with_console_disabled_still_writes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("silent.log");

    let mut config = LogConfig::default();
    config.set_path(&path);
    config.set_max_size(4096);
    config.set_max_backups(5);
    config.set_verbosity(-1);
    let mut writer = LogWriter::new(config);

    run_scenario(&mut writer);

    let lines = collect_lines(&path, 5);
    let records = lines.iter().filter(|l| l.starts_with('<')).count();
    assert_eq!(records, 258);
}
