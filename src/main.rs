use std::path::PathBuf;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use isoca_spot::{config, error, info, server};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Address to listen on, e.g. 127.0.0.1:8000 [default: SERVER_ADDRESS or 0.0.0.0:8000]
    #[clap(long)]
    address: Option<String>,

    /// Load environment variables from this file instead of ./.env
    #[clap(long, env = "ISOCA_SPOT_ENV_FILE")]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = config::load_env(cli.env_file) {
        error!("Cannot load environment. Err: {}", e);
    }

    let spotify_config = match config::SpotifyConfig::from_env() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let addr = cli.address.unwrap_or_else(config::server_addr);
    info!(
        "Starting {} {} against {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        spotify_config.api_url
    );

    if let Err(e) = server::start_api_server(&addr, spotify_config).await {
        error!("Server stopped: {}", e);
    }
}
