use clap::Parser;
use fuel_compare::utils::logger;
use fuel_compare::{
    entry_cost, format_cost, CliConfig, DataSink, FuelType, FuelWorkflow, JsonFileSink,
    MemorySink, RawSubmission,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("starting fuel-compare");
    if config.verbose {
        tracing::debug!("config: {:?}", config);
    }

    let result = match &config.data_file {
        Some(path) => run(JsonFileSink::new(path), &config),
        None => run(MemorySink::new(), &config),
    };

    if let Err(e) = result {
        tracing::error!("comparison round failed: {e}");
        eprintln!("error: {e}");
        let exit_code = if e.is_validation() { 2 } else { 1 };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run<S: DataSink>(sink: S, config: &CliConfig) -> fuel_compare::Result<()> {
    let mut workflow = FuelWorkflow::new(sink);

    workflow.submit(RawSubmission {
        fuel_type: FuelType::Gasoline,
        distance: Some(config.distance),
        consumption: Some(config.gasoline_consumption),
        fuel_price: Some(config.gasoline_price),
    })?;

    workflow.submit(RawSubmission {
        fuel_type: FuelType::Alcohol,
        distance: None,
        consumption: Some(config.alcohol_consumption),
        fuel_price: Some(config.alcohol_price),
    })?;

    println!("Entries:");
    for entry in workflow.entries() {
        println!(
            "  {} km at {} km/l on {}, R$ {:.2}/l - cost {}",
            entry.distance,
            entry.consumption,
            entry.fuel_type,
            entry.fuel_price,
            format_cost(entry_cost(entry)),
        );
    }

    if let Some(outcome) = workflow.outcome() {
        let other = match outcome.preferred {
            FuelType::Gasoline => FuelType::Alcohol,
            FuelType::Alcohol => FuelType::Gasoline,
        };
        println!();
        println!("{} is more economical!", capitalize(outcome.preferred));
        println!(
            "  {}: {}",
            outcome.preferred,
            format_cost(outcome.preferred_cost)
        );
        println!("  {}: {}", other, format_cost(outcome.other_cost));
    }

    Ok(())
}

fn capitalize(fuel: FuelType) -> &'static str {
    match fuel {
        FuelType::Gasoline => "Gasoline",
        FuelType::Alcohol => "Alcohol",
    }
}
