use anyhow::Result;
use clap::Parser;
use dialoguer::{Confirm, Input};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pihex::{Config, RunReport};

mod cli;

use cli::{parse_position, Cli};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(count) = cli.count {
        config.digits = count;
    }
    config.parallel |= cli.parallel;
    config.validate()?;

    let raw = match cli.position {
        Some(raw) => raw,
        None => Input::<String>::new()
            .with_prompt("Enter digit position (0-based)")
            .interact_text()?,
    };
    let position = parse_position(&raw)?;

    if position > config.confirm_above {
        tracing::warn!("Position is extremely large. Results may not be accurate.");
        tracing::warn!("For best results, positions below 1 billion are recommended.");
        if !cli.yes {
            let proceed = Confirm::new()
                .with_prompt("Continue?")
                .default(false)
                .interact()?;
            if !proceed {
                return Ok(());
            }
        }
    }

    let precision = pihex::precision(position, config.digits, &config.bbp)?;
    if precision != pihex::Precision::Full {
        tracing::warn!("Digits from position {} have {:?} precision", position, precision);
    }

    println!(
        "Calculating {} hexadecimal digits of pi starting at position {}:",
        config.digits, position
    );
    let digits = if config.parallel {
        pihex::hex_digits_parallel(position, config.digits, &config.bbp)?
    } else {
        pihex::hex_digits(position, config.digits, &config.bbp)?
    };
    println!("{}", digits);

    if let Some(path) = &cli.report {
        RunReport::new(position, precision, digits).save(path)?;
    }

    Ok(())
}
