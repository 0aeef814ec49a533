//! svgclock - serves an analog clock drawn with svgwrite
//!
//! Usage:
//!   svgclock [OPTIONS]
//!
//! Options:
//!   -a, --addr <ADDR>      Address to listen on [default: 127.0.0.1:8080]
//!   -c, --config <FILE>    Clock appearance (TOML format)
//!   -h, --help             Print help
//!
//! Set `RUST_LOG=debug` to see every document written.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use svgwrite::clock::{clock_face, ClockConfig};

#[derive(Parser)]
#[command(name = "svgclock")]
#[command(about = "Serve an SVG analog clock over HTTP")]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    addr: String,

    /// Clock appearance file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => ClockConfig::from_file(path).map_err(|e| {
            format!("loading clock config '{}': {}", path.display(), e)
        })?,
        None => ClockConfig::default(),
    };

    let app = Router::new()
        .route("/", get(index))
        .with_state(Arc::new(config));

    let listener = tokio::net::TcpListener::bind(&cli.addr).await?;
    info!(addr = %cli.addr, "open http://{} in a web browser", cli.addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index(
    State(config): State<Arc<ClockConfig>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let face = clock_face(&chrono::Local::now(), &config);

    let mut svg = Vec::new();
    face.write_to(&mut svg)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let svg = String::from_utf8(svg)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Html(format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta http-equiv=\"refresh\" content=\"{}\">\n",
            "<title>svgclock</title>\n",
            "</head>\n",
            "<body>\n",
            "{}\n",
            "</body>\n",
            "</html>\n",
        ),
        config.refresh_secs, svg
    )))
}
