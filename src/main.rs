//! Terminal front-end for the login and admin dashboard forms.
//!
//! # Usage
//!
//! ```bash
//! # Log in and print the dashboard the browser would open
//! cargo run -- login --name alice
//!
//! # Change the administrator password
//! cargo run -- passwd
//!
//! # Point the backend at a database
//! cargo run -- db-url --url "user:passwd@host:port/database"
//! ```
//!
//! # Environment Variables
//!
//! See [`kraken_forms::config`]; `.env` is honoured.

#[cfg(not(target_arch = "wasm32"))]
mod cli;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<std::process::ExitCode> {
    cli::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
