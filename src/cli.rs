//! Command-line driver: prompts stand in for the page's input fields.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use tracing_subscriber::EnvFilter;

use kraken_forms::application::handlers::{
    DbUrlHandler, FormOutcome, LoginHandler, PasswordChangeHandler,
};
use kraken_forms::config::{self, Config};
use kraken_forms::domain::entities::{DashboardRoutes, FieldId};
use kraken_forms::infrastructure::http::ReqwestTransport;
use kraken_forms::infrastructure::page::TerminalPage;

/// Drive the mail archive's login and admin forms from a terminal.
#[derive(Parser)]
#[command(name = "kraken-forms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// One subcommand per form.
#[derive(Subcommand)]
enum Commands {
    /// Log in and show the dashboard destination
    Login {
        /// Login name (prompted if omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Change the administrator password (logs in as admin first)
    Passwd,

    /// Change the backend database URL (logs in as admin first)
    DbUrl {
        /// New database URL (prompted if omitted)
        #[arg(short, long)]
        url: Option<String>,
    },
}

/// Shared per-run state: one transport (one cookie jar) and one page.
struct Session {
    transport: Arc<ReqwestTransport>,
    page: Arc<TerminalPage>,
    routes: DashboardRoutes,
}

pub async fn run() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let base_url = config.api_base()?;
    let transport = Arc::new(
        ReqwestTransport::new(base_url.clone()).context("Failed to build HTTP client")?,
    );
    let session = Session {
        transport,
        page: Arc::new(TerminalPage::new(base_url)),
        routes: config.routes(),
    };

    let outcome = match cli.command {
        Commands::Login { name } => login(&session, name).await?,
        Commands::Passwd => match admin_login(&session).await? {
            Some(failed) => failed,
            None => change_password(&session).await?,
        },
        Commands::DbUrl { url } => match admin_login(&session).await? {
            Some(failed) => failed,
            None => change_db_url(&session, url).await?,
        },
    };

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Installs the `tracing` subscriber on stderr, honouring `LOG_FORMAT`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Runs the login form.
async fn login(session: &Session, name: Option<String>) -> Result<FormOutcome> {
    println!("{}", "🔑 Log in".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Login")
            .allow_empty(true)
            .interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    submit_login(session, name, password).await
}

/// Logs in as the admin identity.
///
/// Returns `Some(outcome)` if the login did not land on the admin dashboard.
async fn admin_login(session: &Session) -> Result<Option<FormOutcome>> {
    println!(
        "{} {}",
        "🔑 Log in as".bright_blue().bold(),
        session.routes.admin_login.cyan()
    );
    println!();

    let password = Password::new()
        .with_prompt("Administrator password")
        .allow_empty_password(true)
        .interact()?;

    let outcome = submit_login(session, session.routes.admin_login.clone(), password).await?;
    match &outcome {
        FormOutcome::Navigated(path) if *path == session.routes.admin_dashboard => Ok(None),
        _ => Ok(Some(outcome)),
    }
}

async fn submit_login(session: &Session, name: String, password: String) -> Result<FormOutcome> {
    session.page.set_field(FieldId::LoginName, name);
    session.page.set_field(FieldId::Password, password);

    let handler = LoginHandler::new(
        session.transport.clone(),
        session.page.clone(),
        session.routes.clone(),
    );
    Ok(handler.submit().await)
}

/// Runs the password change form.
async fn change_password(session: &Session) -> Result<FormOutcome> {
    println!();
    println!("{}", "🔒 Change administrator password".bright_blue().bold());
    println!();

    let current = Password::new()
        .with_prompt("Current password")
        .allow_empty_password(true)
        .interact()?;
    let new = Password::new()
        .with_prompt("New password")
        .allow_empty_password(true)
        .interact()?;
    let repeat = Password::new()
        .with_prompt("Repeat new password")
        .allow_empty_password(true)
        .interact()?;

    session.page.set_field(FieldId::CurrentPassword, current);
    session.page.set_field(FieldId::NewPassword, new);
    session.page.set_field(FieldId::RepeatPassword, repeat);

    let handler = PasswordChangeHandler::new(session.transport.clone(), session.page.clone());
    let outcome = handler.submit().await;
    if outcome.is_success() {
        println!("{}", "✅ Password changed".green().bold());
    }
    Ok(outcome)
}

/// Runs the database URL form.
async fn change_db_url(session: &Session, url: Option<String>) -> Result<FormOutcome> {
    println!();
    println!("{}", "🗄  Change database URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Database URL")
            .with_initial_text("user:passwd@host:port/database")
            .interact_text()?,
    };
    session.page.set_field(FieldId::DbUrl, url);

    let handler = DbUrlHandler::new(session.transport.clone(), session.page.clone());
    let outcome = handler.submit().await;
    if outcome.is_success() {
        println!("{}", "✅ Database URL updated".green().bold());
    }
    Ok(outcome)
}
