use clap::Parser;
use color_eyre::Result;
use itertools::Itertools;
use motorpool::{cli, config::Config, logging, registry::Registry, user::User};
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if let Some(command) = cli.command {
        match command {
            cli::Commands::Examples(example) => match example {
                cli::Examples::Config => {
                    let c = Config::example();
                    println!("{}", c.serialize_pretty());
                }
            },
        }

        return Ok(());
    }

    logging::init();

    let config = if let Some(config_path) = cli.config {
        debug!(?config_path, "Config from path");
        Config::new_from_path(config_path)
    } else {
        debug!("Example config");
        Config::example()
    };

    let (registry, vehicles) = Registry::from_config(&config)?;

    for vehicle in &vehicles {
        info!(%vehicle, "In fleet");
    }

    for name in registry.users().sorted() {
        let user = User::new(name);

        let held = registry.vehicles_of(&user);
        info!(%user, vehicles = held.len(), "Holder");

        for vehicle in held {
            info!("    {vehicle}");
        }
    }

    Ok(())
}
