use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use greeter::{Greetable, Greeter, GreeterConfig, Inventory};

#[derive(Parser)]
#[command(name = "greeter", version, about = "Print a greeting and render one inventory record.")]
struct Cli {
    /// JSON or YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Material of the record
    #[arg(short, long, default_value = "wool")]
    material: String,

    /// Item count of the record
    #[arg(short = 'n', long, default_value_t = 17)]
    count: u64,

    /// Full record as JSON, e.g. '{"Material": "wool", "Count": 17}'
    #[arg(short, long, conflicts_with_all = ["material", "count"])]
    record: Option<String>,

    /// Template override
    #[arg(short, long)]
    template: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => greeter::config::load_config(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => GreeterConfig::default(),
    };
    if let Some(template) = cli.template {
        config.template = template;
    }

    greeter::logging::init(&config.log.level);

    let record = match cli.record {
        Some(json) => Inventory::from_json(&json)?,
        None => Inventory::new(cli.material, cli.count),
    };
    info!(material = %record.material, count = record.count, "greeting");

    let greeter = Greeter::from_config(&config, record)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    greeter.greet(&mut out)?;

    Ok(())
}
