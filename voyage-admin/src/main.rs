use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voyage_admin::{commands, AdminResult, CollectionName, SiteStore};
use voyage_store::app_config::Config;

#[derive(Parser, Debug)]
#[command(name = "voyage-admin", about = "Inspect and reset the travel site's stored collections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dashboard counters
    Summary,
    /// Print a collection as JSON
    List {
        collection: CollectionName,
        /// Only records whose active flag is not false
        #[arg(long)]
        active: bool,
    },
    /// Restore one collection, or all of them, to the built-in data
    Reset { collection: Option<CollectionName> },
}

fn run(cli: Cli) -> AdminResult<()> {
    let config = Config::load()?;
    tracing::debug!(
        "Using {:?} storage in {} under namespace '{}'",
        config.storage.backend,
        config.storage.data_dir.display(),
        config.storage.namespace
    );
    let site = SiteStore::from_config(&config)?;

    match cli.command {
        Command::Summary => {
            println!("{}", serde_json::to_string_pretty(&site.summary())?);
        }
        Command::List { collection, active } => {
            println!("{}", commands::list(&site, collection, active)?);
        }
        Command::Reset { collection } => {
            for line in commands::reset(&site, collection)? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voyage_admin=info,voyage_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
