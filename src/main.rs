//! `fileserv` command line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use fileserv::{HttpServer, ServerConfig};

/// Serve a directory tree over HTTP/1.1.
#[derive(Debug, Parser)]
#[command(name = "fileserv", version, about)]
struct Cli {
    /// Path to the properties configuration file
    #[arg(default_value = "httpd.conf")]
    config: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ServerConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            init_logger(false);
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    init_logger(config.debug);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let media = config.load_media_types()?;
    info!("Serving {} as {}", config.content_root.display(), config.name);

    let server = HttpServer::new(config, media)?;
    let listener = server.bind()?;
    info!("Server listening on http://{}", listener.local_addr()?);

    server.run(listener)?;
    Ok(())
}

/// Log at `info`, or `debug` when the configuration asks for tracing.
/// `RUST_LOG` still takes precedence.
fn init_logger(debug: bool) {
    let filter = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();
}
