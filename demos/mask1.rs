//!
//! Formats values from the command line.
//!
//! ```text
//! cargo run --example mask1 -- "(00) 00000-0000" 11987654321 119876
//! cargo run --example mask1 -- -r "#.##0,00" 123456 75
//! ```
//!

use anyhow::anyhow;
use log::debug;
use rat_mask::{MaskOptions, MaskedInputState};
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut args = env::args().skip(1).collect::<Vec<_>>();
    let reverse = if args.first().map(|v| v.as_str()) == Some("-r") {
        args.remove(0);
        true
    } else {
        false
    };
    if args.is_empty() {
        return Err(anyhow!("usage: mask1 [-r] <mask> <value>..."));
    }
    let mask = args.remove(0);

    let mut state = MaskedInputState::new(MaskOptions::new(mask).reverse(reverse))
        .on_complete(|v| debug!("complete {}", v));
    debug!("{:?}", state);

    for raw in args {
        if !state.handle_change(&raw).is_changed() {
            debug!("unchanged {:?}", raw);
        }
        println!(
            "{:>20} -> {:<20} {}",
            raw,
            state.value(),
            if state.is_complete() { "complete" } else { "" }
        );
    }

    Ok(())
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("log.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
