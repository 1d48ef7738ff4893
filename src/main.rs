use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use driver::Driver;
use flags::Schema;

mod config;
mod driver;
mod encoding;
mod error;
mod flags;
mod models;
mod options;
mod swarm;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn create(schema: &Schema, matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let mut driver = Driver::new(schema);

    if let Err(err) = driver.set_config_from_flags(matches) {
        error!(option = err.option(), "invalid harvester configuration: {err}");
        return Err(err.into());
    }

    info!(
        image = %driver.config().image_name,
        namespace = %driver.config().vm_namespace,
        network_type = %driver.config().network_type,
        "harvester configuration validated"
    );

    let config = driver.into_config();

    println!(
        "{}",
        serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?
    );

    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let schema = Schema::default();
    let matches = config::command(&schema).get_matches();

    match matches.subcommand() {
        Some((config::CREATE, create_matches)) => create(&schema, create_matches),
        Some((config::FLAGS, _)) => {
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        _ => unreachable!("subcommand is required"),
    }
}
