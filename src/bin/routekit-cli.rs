use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use routekit::config::load_route_table;

#[derive(Parser)]
#[command(name = "routekit-cli")]
#[command(about = "Inspect and resolve routekit route tables", long_about = None)]
struct Cli {
    /// Path to the TOML route table.
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the route table and compile it, reporting any errors
    Validate,
    /// Resolve a method and path (or full URL) against the table
    Resolve {
        /// HTTP method, any case
        method: String,
        /// Request path or full URL
        path: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "routekit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let table = match load_route_table(&cli.config) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: failed to load {}: {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let router = match table.build_router() {
        Ok(router) => router,
        Err(e) => {
            eprintln!("Error: route table is invalid: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Validate => {
            for route in router.routes() {
                println!(
                    "{:3}  {:6} {}  -> {}",
                    route.index(),
                    route.method(),
                    route.pattern(),
                    route.destination()
                );
            }
            println!("OK: {} routes compiled", router.len());
            ExitCode::SUCCESS
        }
        Commands::Resolve { method, path } => match router.find_url(&method, &path) {
            Ok(Some(matched)) => {
                let params: serde_json::Map<_, _> = matched
                    .params
                    .iter()
                    .map(|(name, value)| (name.to_string(), json!(value)))
                    .collect();
                let output = json!({
                    "destination": matched.route.destination(),
                    "pattern": matched.route.pattern(),
                    "params": params,
                });
                match serde_json::to_string_pretty(&output) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
                ExitCode::SUCCESS
            }
            Ok(None) => {
                eprintln!("No route matched {} {}", method.to_uppercase(), path);
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
