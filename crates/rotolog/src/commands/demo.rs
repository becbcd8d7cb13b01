//! Mixed-level demo loop exercising rotation, the gate, and dedup

use anyhow::Result;
use rotolog_core::Level;
use rotolog_engine::LogWriter;

use crate::cli::DemoArgs;

pub fn execute(writer: &mut LogWriter, args: DemoArgs) -> Result<()> {
    writer.log(&format!(
        "logging squares of 0..={} to {}",
        args.count,
        writer.config().path().display()
    ))?;

    for i in 0..=args.count {
        let level = pick_level(i, args.count);
        if level == Level::Default {
            writer.write_break()?;
        }
        let message = format!("{}^2 = {}", i, (i as u64) * (i as u64));
        writer.log_at(level, &message)?;
    }
    Ok(())
}

/// Endpoints log as errors, powers of two as warnings, multiples of ten
/// as defaults (each preceded by a break), remaining evens as info and
/// odds as debug.
fn pick_level(i: u32, last: u32) -> Level {
    if i == 0 || i == last {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_level() {
        assert_eq!(pick_level(0, 256), Level::Error);
        assert_eq!(pick_level(256, 256), Level::Error);
        assert_eq!(pick_level(64, 256), Level::Warning);
        assert_eq!(pick_level(50, 256), Level::Default);
        assert_eq!(pick_level(6, 256), Level::Info);
        assert_eq!(pick_level(7, 256), Level::Debug);
    }

    #[test]
    fn test_break_count_matches_default_lines() {
        let defaults = (0u32..=256)
            .filter(|&i| pick_level(i, 256) == Level::Default)
            .count();
        // Multiples of ten in 10..=250 that are not endpoints or powers of two.
        assert_eq!(defaults, 25);
    }
}
