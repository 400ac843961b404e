use anyhow::Result;
use clap::Parser;
use log::*;
use serde::Serialize;
use std::path::PathBuf;

mod config;
mod electricity_price;
mod snapshot;
mod switching;

use config::Config;
use control::EvaluationResult;
use electricity_price::HourlyElectricityPrice;
use snapshot::Snapshot;
use switching::DeviceCommand;

/// Decide which smart-home devices run for one snapshot.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Snapshot JSON file; read from stdin when omitted
    snapshot: Option<PathBuf>,

    /// Hourly price table, used when the snapshot has no current_price
    #[arg(long)]
    prices: Option<PathBuf>,

    /// Print the decision on a single line
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Serialize)]
struct Decision {
    #[serde(flatten)]
    result: EvaluationResult,
    commands: Vec<DeviceCommand>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::read()?;

    let snapshot = Snapshot::read(args.snapshot.as_deref())?;
    let prices = args
        .prices
        .as_deref()
        .map(HourlyElectricityPrice::load)
        .transpose()?;
    let price = snapshot.resolve_price(prices.as_ref())?;

    let (input, observed) = snapshot.into_input(&config.defaults, price);
    input.validate()?;
    info!("Evaluating snapshot at {}", input.current_time);

    let result = control::evaluate(&input);
    if result.energy_saving_mode {
        warn!(
            "Price {:?} above threshold {:?}, energy saving mode",
            input.current_price, input.config.price_threshold
        );
    }
    if input.usage_limit_exceeded() {
        warn!(
            "Usage {:?} over limit {:?}, total corrected to {:?}",
            input.total_energy_used_today,
            input.config.energy_usage_limit,
            result.total_energy_used
        );
    }

    let commands = switching::switching_plan(&result.device_status, &observed);
    let decision = Decision { result, commands };

    let json = if args.compact {
        serde_json::to_string(&decision)?
    } else {
        serde_json::to_string_pretty(&decision)?
    };
    println!("{}", json);

    Ok(())
}
