use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use askgate::connector::api::{serve, Router};
use askgate::{build_app, Commands, Container, ContainerConfig, GatewayConfig};

#[derive(Parser)]
#[command(name = "askgate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true)]
    mock_completions: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // RUST_LOG takes precedence over --verbose.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let gateway = GatewayConfig::from_env().context("invalid gateway configuration")?;
    let container = Container::new(ContainerConfig {
        gateway,
        mock_completions: cli.mock_completions,
    });

    match cli.command {
        Commands::Serve { host, port } => {
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("invalid listen address {host}:{port}"))?;

            let config = container.config();
            info!(
                "Endpoint {} (GraphiQL {})",
                config.graphql_endpoint,
                if config.graphiql_enabled() { "enabled" } else { "disabled" }
            );

            let app = build_app(&container)?;
            serve(app, addr).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
