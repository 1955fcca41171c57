//! Prints viscosity, VTC, slope, and viscosity index for a set of reference oils.
//!
//! Run with `cargo run --example lubricant_table`. Pass `debug` or `trace`
//! as the first argument to see model logging.

use log::LevelFilter;
use prettytable::{Table, row};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use viscosity_models::models::tribology::lubricant::{Lubricant, LubricantError};

const SAMPLES: [(&str, f64, f64); 8] = [
    ("Naphthenic spindle oil", 30.0, 4.24),
    ("Paraffinic spindle oil", 30.0, 5.23),
    ("Medium solvent extract", 120.0, 8.0),
    ("Medium polyglycol", 120.0, 20.9),
    ("Medium silicone oil", 120.0, 50.0),
    ("Multigrade motor oil", 70.0, 11.1),
    ("Ester oil", 30.0, 5.81),
    ("Tribology-ABC", 68.0, 8.6),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = match std::env::args().nth(1).as_deref() {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        _ => LevelFilter::Warn,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut table = Table::new();
    table.add_row(row!["Label", "visc40", "visc100", "visc60", "VI", "m", "VTC"]);

    for (label, visc40, visc100) in SAMPLES {
        let mut oil = Lubricant::named_with_viscosities(label, visc40, visc100);
        table.add_row(summarize(&mut oil)?);
    }

    table.printstd();
    Ok(())
}

fn summarize(oil: &mut Lubricant) -> Result<prettytable::Row, LubricantError> {
    let visc40 = oil.viscosity(40)?;
    let visc100 = oil.viscosity(100)?;
    let visc60 = oil.viscosity(60)?;
    let vi = oil.viscosity_index()?;
    let m = oil.m()?;

    Ok(row![
        oil.label(),
        format!("{visc40:.2}"),
        format!("{visc100:.2}"),
        format!("{visc60:.2}"),
        vi,
        format!("{m:.2}"),
        format!("{:.3}", oil.vtc())
    ])
}
