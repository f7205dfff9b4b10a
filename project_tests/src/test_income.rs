//! # Income Endpoints Live Test
//!
//! Calls one income endpoint against the provider environment named by
//! `PLAID_ENV` (sandbox by default) and prints the typed result.
//!
//! Credentials come from `PLAID_CLIENT_ID` / `PLAID_SECRET`, read from the
//! process environment or a `.env` file.
//!
//! ```text
//! test_income user-create --client-user-id demo-1
//! test_income sessions --user-token user-sandbox-...
//! test_income bank-income --user-token user-sandbox-... --count 1
//! test_income income --access-token access-sandbox-...
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lib_income::income::{bank_income, credit_sessions, income_get, user};
use lib_income::loggers::setup_logging;
use lib_income::{IncomeConfig, IncomeError, Params};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Live runner for the income endpoints")]
struct Args {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Directory for the rolling JSON log file.
    #[arg(long, env = "LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// user/create
    UserCreate {
        #[arg(long)]
        client_user_id: String,
    },
    /// credit/sessions/get
    Sessions {
        #[arg(long)]
        user_token: String,
    },
    /// credit/bank_income/get
    BankIncome {
        #[arg(long)]
        user_token: String,
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// income/get
    Income {
        #[arg(long)]
        access_token: String,
    },
}

fn print_result<T: Serialize>(data: &T) -> Result<()> {
    println!("\n[SUCCESS] Data received:");
    println!("-----------------------------------------------");
    println!("{}", serde_json::to_string_pretty(data)?);
    println!("-----------------------------------------------");
    Ok(())
}

async fn run(command: Command, config: &IncomeConfig) -> Result<()> {
    let mut params = Params::new();
    match command {
        Command::UserCreate { client_user_id } => {
            params.insert("client_user_id".into(), json!(client_user_id));
            let data = user::create(params, Some(config)).await?;
            info!(user_id = data.user_id.as_deref().unwrap_or(""), "user created");
            print_result(&data)
        }
        Command::Sessions { user_token } => {
            params.insert("user_token".into(), json!(user_token));
            let data = credit_sessions::get(params, Some(config)).await?;
            info!(sessions = data.sessions.len(), "sessions received");
            print_result(&data)
        }
        Command::BankIncome { user_token, count } => {
            params.insert("user_token".into(), json!(user_token));
            params.insert("options".into(), json!({ "count": count }));
            let data = bank_income::get(params, Some(config)).await?;
            info!(reports = data.bank_income.len(), "bank income received");
            print_result(&data)
        }
        Command::Income { access_token } => {
            params.insert("access_token".into(), json!(access_token));
            let data = income_get::get(params, Some(config)).await?;
            info!(streams = data.income.income_streams.len(), "income received");
            print_result(&data)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = setup_logging(&args.log_level, args.log_dir.as_deref(), "test_income")
        .context("Failed to initialize logging")?;

    let config = IncomeConfig::from_env();
    println!("[*] Requesting live data ({:?})...", config);

    if let Err(e) = run(args.command, &config).await {
        eprintln!("\n[ERROR] Request failed:");
        eprintln!(">>> {}", e);
        if let Some(info) = e.downcast_ref::<IncomeError>().and_then(IncomeError::error_info) {
            error!(
                error_type = info.error_type.as_deref().unwrap_or(""),
                request_id = info.request_id.as_deref().unwrap_or(""),
                "provider error"
            );
        }
        std::process::exit(1);
    }

    Ok(())
}
