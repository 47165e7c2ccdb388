//! Isoca Spot service library
//!
//! This library implements a small HTTP service that signs a user in with
//! Spotify through the OAuth 2.0 authorization-code flow and serves that
//! user's top tracks, enriched with the genres of every artist on each track.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the `/api/spotify/*` routes
//! - `config` - Configuration management and environment variables
//! - `enrichment` - Joins artist genres onto a page of top tracks
//! - `error` - Error kinds and their HTTP mapping
//! - `server` - Router construction and the listening loop
//! - `spotify` - Spotify Web API and accounts service client
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use isoca_spot::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> isoca_spot::Res<()> {
//!     config::load_env(None)?;
//!     let config = config::SpotifyConfig::from_env()?;
//!     server::start_api_server(&config::server_addr(), config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for process-level operations that may fail.
///
/// Used at the edges of the application (startup, binding the listener)
/// where any error is reported and ends the process. Request handling uses
/// [`error::Result`] instead so the error kind survives to the HTTP layer.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal startup failures. Request handlers report errors
/// through [`error::Error`] and never call this.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a rejected token exchange or a failed
/// upstream lookup, which are also returned to the caller.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
