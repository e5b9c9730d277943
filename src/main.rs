use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use nodeconv::{convert_all, Settings};

/// Convert proxy node descriptions into subscription URIs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (TOML, or YAML with a `common:` section)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Read node descriptions from this file instead of standard input
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Write converted links to this file instead of standard output
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,

    /// Start the HTTP server instead of converting once
    #[arg(long)]
    serve: bool,

    /// Listen address (e.g., 127.0.0.1 or 0.0.0.0)
    #[arg(short, long, value_name = "ADDRESS")]
    address: Option<String>,

    /// Listen port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = match args.config.as_deref() {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from '{}'", path))?,
        None => Settings::default(),
    };
    if let Some(address) = args.address.clone() {
        settings.listen_address = address;
    }
    if let Some(port) = args.port {
        settings.listen_port = port;
    }

    env_logger::init_from_env(Env::default().default_filter_or(settings.log_level.as_str()));

    if args.serve {
        return serve(settings);
    }

    let input = match args.input.as_deref() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            buf
        }
    };

    let mut result = convert_all(&input);
    if settings.trailing_newline && !result.is_empty() {
        result.push('\n');
    }

    match args.output.as_deref() {
        Some(path) => {
            std::fs::write(path, &result)
                .with_context(|| format!("failed to write output file '{}'", path))?;
            info!("Successfully wrote converted nodes to {}", path);
        }
        None => io::stdout()
            .write_all(result.as_bytes())
            .context("failed to write standard output")?,
    }

    Ok(())
}

#[cfg(feature = "web-api")]
fn serve(settings: Settings) -> anyhow::Result<()> {
    use actix_web::{App, HttpServer};
    use nodeconv::web_handlers::interfaces;

    let listen_address = settings.bind_address();
    let workers = settings.max_concur_threads.max(1) as usize;
    info!("nodeconv starting on {}", listen_address);

    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(|| App::new().configure(interfaces::config))
            .bind(&listen_address)?
            .workers(workers)
            .run()
            .await
    })?;

    Ok(())
}

#[cfg(not(feature = "web-api"))]
fn serve(_settings: Settings) -> anyhow::Result<()> {
    anyhow::bail!("the HTTP server requires building with the `web-api` feature")
}
