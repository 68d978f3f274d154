use clap::Parser;
use std::path::PathBuf;

/// Arguments for one comparison round: the shared trip distance plus
/// consumption and pump price for each fuel.
#[derive(Debug, Clone, Parser)]
#[command(name = "fuel-compare")]
#[command(about = "Compares the cost of a trip on gasoline versus alcohol")]
pub struct CliConfig {
    /// Trip distance in km, shared by both entries
    #[arg(long)]
    pub distance: f64,

    /// Gasoline consumption in km/l
    #[arg(long)]
    pub gasoline_consumption: f64,

    /// Gasoline price in R$/l
    #[arg(long)]
    pub gasoline_price: f64,

    /// Alcohol consumption in km/l
    #[arg(long)]
    pub alcohol_consumption: f64,

    /// Alcohol price in R$/l
    #[arg(long)]
    pub alcohol_price: f64,

    /// Write the entry list to this JSON file instead of keeping it in memory
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
