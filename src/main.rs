use anyhow::Result;
use clap::Parser;
use weather_predictor::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_predictor::logging::init(&cli)?;
    weather_predictor::run(cli).await
}
