use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "bplyzer")]
#[clap(about = "AI-powered blood pressure reading analysis", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
