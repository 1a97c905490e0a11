//! students-auth - command line login for the students service.
//!
//! Logs in against `/api/auth/login`, keeps the session token in the user
//! cache directory and reports the result as a localized message.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use students_auth_core::auth::TOKEN_KEY;
use students_auth_core::login;
use students_auth_core::{
    AuthClient, Config, FileStore, Locale, LoginInvoker, SessionStore, StderrNotifier,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "students-auth", version, about = "Log in to the students service")]
struct Cli {
    /// Service base URL (overrides config and STUDENTS_AUTH_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Message language: ru or en
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit credentials and store the session token
    Login {
        /// Login name; prompted for when omitted
        #[arg(long)]
        login: Option<String>,

        /// Password; prompted for (hidden) when omitted
        #[arg(long, env = "STUDENTS_AUTH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Remove the stored session token
    Logout,
    /// Show whether a session token is stored
    Status,
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing();

    let mut config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    debug!(base_url = %config.base_url, locale = %config.locale, "Config loaded");

    let cache_dir = config.cache_dir().unwrap_or_else(|_| PathBuf::from("./cache"));
    let store = Arc::new(FileStore::new(cache_dir));
    let session = SessionStore::new(store.clone());

    match cli.command {
        Command::Login { login, password } => {
            let login = match login {
                Some(login) => login,
                None => prompt_login(config.last_login.as_deref())?,
            };
            let password = match password {
                Some(password) => password,
                None => prompt_password()?,
            };

            let invoker = build_invoker(&config, session)?;
            let outcome = invoker.login(&login, &password).await;

            if outcome.is_success() {
                config.last_login = Some(login);
                if let Err(e) = config.save() {
                    warn!(error = %e, "Failed to save config");
                }
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Logout => run_logout(&config, &session),
        Command::Status => {
            if !session.is_logged_in() {
                println!("Not logged in");
                return Ok(ExitCode::FAILURE);
            }
            match store.saved_at(TOKEN_KEY)? {
                Some(at) => println!("Logged in (token saved {})", at.format("%Y-%m-%d %H:%M UTC")),
                None => println!("Logged in"),
            }
            info!(path = %store.path().display(), "Session file");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Logout only touches the session store, so a bad base URL cannot block it
fn run_logout(config: &Config, session: &SessionStore) -> Result<ExitCode> {
    login::logout(session, &StderrNotifier, config.locale).context("Failed to clear session")?;
    Ok(ExitCode::SUCCESS)
}

fn build_invoker(config: &Config, session: SessionStore) -> Result<LoginInvoker> {
    let client = AuthClient::from_config(config).context("Failed to create HTTP client")?;
    Ok(LoginInvoker::new(
        client,
        session,
        Arc::new(StderrNotifier),
        config.locale,
    ))
}

fn prompt_login(last_login: Option<&str>) -> Result<String> {
    match last_login {
        Some(last) => print!("Login [{}]: ", last),
        None => print!("Login: "),
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    // Only the line terminator is dropped; the login is sent as typed
    let input = input.trim_end_matches(['\r', '\n']);

    match last_login {
        Some(last) if input.is_empty() => Ok(last.to_string()),
        _ => Ok(input.to_string()),
    }
}

fn prompt_password() -> Result<String> {
    let password = rpassword::prompt_password("Password: ")?;
    Ok(password)
}
