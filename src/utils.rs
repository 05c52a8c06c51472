use std::{env, io::Write};

use chrono::Local;
use clap::Command;
use env_logger::Builder;
use log::LevelFilter;

use crate::COPYRIGHT;

/// Logs at the Info level unless `RUST_LOG` says otherwise, or at the Debug
/// level when `debug` is set.
pub fn init_logger(plain: bool, debug: bool) {
    let mut builder = Builder::new();

    if plain {
        builder.format(|formatter, record| {
            writeln!(formatter, "[{}]: {}", record.level(), record.args())
        });
    } else {
        builder.format(|formatter, record| {
            writeln!(
                formatter,
                "{} [{}] ({}): {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %z"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    }

    if debug {
        builder.filter(None, LevelFilter::Debug);
    } else if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else {
        // if no RUST_LOG provided, default to logging at the Info level
        builder.filter(None, LevelFilter::Info);
    }

    builder.init();
}

/// Writes `<name>.1` into the current directory.
///
/// # Errors
///
/// If rendering or writing the man page fails.
pub fn generate_man_page(command: Command, name: &'static str) -> anyhow::Result<()> {
    let mut buffer: Vec<u8> = Vec::default();
    let cmd = command.name(name).long_version(None);
    let man = clap_mangen::Man::new(cmd).date("2025-11-21");

    man.render(&mut buffer)?;
    write!(buffer, "{COPYRIGHT}")?;

    std::fs::write(format!("{name}.1"), buffer)?;
    Ok(())
}
