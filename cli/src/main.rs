use clap::Parser;
use presentation::cli::{Cli, CliApp};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    shared::telemetry::init_tracing("warn");
    let cli = Cli::parse();
    let mut app = CliApp::new();
    let outcome = app.run(cli).await?;
    if outcome.is_failure() {
        std::process::exit(1);
    }
    Ok(())
}
