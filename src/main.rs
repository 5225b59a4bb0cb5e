#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use mediadesk_client::auth::Credentials;
use mediadesk_client::client::{ApiClient, RequestOptions};
use mediadesk_client::config::Config;
use mediadesk_client::session::FileStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "mediadesk", version, about = "Admin CLI for the MediaDesk streaming catalog backend")]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in and persist the session locally
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Revoke the refresh token (best effort) and clear the local session
    Logout,
    /// Show the stored user record
    Whoami,
    /// Dashboard counters
    Stats,
    #[command(subcommand)]
    Movies(Crud),
    #[command(subcommand)]
    Series(Crud),
    #[command(subcommand)]
    Episodes(Crud),
    #[command(subcommand)]
    Channels(Crud),
    #[command(subcommand)]
    Users(UserCrud),
    #[command(subcommand)]
    Subscriptions(Crud),
    #[command(subcommand)]
    UserSubscriptions(Crud),
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Debug, Subcommand)]
enum Crud {
    List,
    /// Create a record from a JSON payload
    Add {
        #[arg(long)]
        data: String,
    },
    /// Replace a record from a JSON payload
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum UserCrud {
    List,
    Get {
        id: i64,
    },
    Add {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    Get,
    Update {
        #[arg(long)]
        data: String,
    },
    ChangePassword {
        #[arg(long)]
        data: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = Arc::new(FileStore::new(cli.config.session.session_file.clone()));
    let client = ApiClient::new(&cli.config.api, store)?;
    let opts = RequestOptions::default();

    match cli.command {
        Command::Login { email, password } => {
            let session = client.auth().login(&Credentials { email, password }).await?;
            emit(&serde_json::json!({ "loggedIn": true, "user": session.user }))?;
        }
        Command::Logout => {
            client.auth().logout().await?;
            emit(&serde_json::json!({ "loggedIn": false }))?;
        }
        Command::Whoami => {
            let user = client.auth().current_user()?.context("not logged in")?;
            emit(&user)?;
        }
        Command::Stats => emit(&client.dashboard().stats(&opts).await?)?,
        Command::Movies(cmd) => {
            let api = client.movies();
            match cmd {
                Crud::List => emit(&api.list(&opts).await?)?,
                Crud::Add { data } => emit(&api.create(&parse(&data)?, &opts).await?)?,
                Crud::Update { id, data } => emit(&api.update(id, &parse(&data)?, &opts).await?)?,
                Crud::Delete { id } => emit(&api.delete(id, &opts).await?)?,
            }
        }
        Command::Series(cmd) => {
            let api = client.series();
            match cmd {
                Crud::List => emit(&api.list(&opts).await?)?,
                Crud::Add { data } => emit(&api.create(&parse(&data)?, &opts).await?)?,
                Crud::Update { id, data } => emit(&api.update(id, &parse(&data)?, &opts).await?)?,
                Crud::Delete { id } => emit(&api.delete(id, &opts).await?)?,
            }
        }
        Command::Episodes(cmd) => {
            let api = client.episodes();
            match cmd {
                Crud::List => emit(&api.list(&opts).await?)?,
                Crud::Add { data } => emit(&api.create(&parse(&data)?, &opts).await?)?,
                Crud::Update { id, data } => emit(&api.update(id, &parse(&data)?, &opts).await?)?,
                Crud::Delete { id } => emit(&api.delete(id, &opts).await?)?,
            }
        }
        Command::Channels(cmd) => {
            let api = client.channels();
            match cmd {
                Crud::List => emit(&api.list(&opts).await?)?,
                Crud::Add { data } => emit(&api.create(&parse(&data)?, &opts).await?)?,
                Crud::Update { id, data } => emit(&api.update(id, &parse(&data)?, &opts).await?)?,
                Crud::Delete { id } => emit(&api.delete(id, &opts).await?)?,
            }
        }
        Command::Users(cmd) => {
            let api = client.users();
            match cmd {
                UserCrud::List => emit(&api.list(&opts).await?)?,
                UserCrud::Get { id } => emit(&api.get(id, &opts).await?)?,
                UserCrud::Add { data } => emit(&api.create(&parse(&data)?, &opts).await?)?,
                UserCrud::Update { id, data } => emit(&api.update(id, &parse(&data)?, &opts).await?)?,
                UserCrud::Delete { id } => emit(&api.delete(id, &opts).await?)?,
            }
        }
        Command::Subscriptions(cmd) => {
            let api = client.subscriptions();
            match cmd {
                Crud::List => emit(&api.list(&opts).await?)?,
                Crud::Add { data } => emit(&api.create(&parse(&data)?, &opts).await?)?,
                Crud::Update { id, data } => emit(&api.update(id, &parse(&data)?, &opts).await?)?,
                Crud::Delete { id } => emit(&api.delete(id, &opts).await?)?,
            }
        }
        Command::UserSubscriptions(cmd) => {
            let api = client.user_subscriptions();
            match cmd {
                Crud::List => emit(&api.list(&opts).await?)?,
                Crud::Add { data } => emit(&api.create(&parse(&data)?, &opts).await?)?,
                Crud::Update { id, data } => emit(&api.update(id, &parse(&data)?, &opts).await?)?,
                Crud::Delete { id } => emit(&api.delete(id, &opts).await?)?,
            }
        }
        Command::Settings(cmd) => {
            let api = client.settings();
            match cmd {
                SettingsCommand::Get => emit(&api.get_data(&opts).await?)?,
                SettingsCommand::Update { data } => emit(&api.update(&parse(&data)?, &opts).await?)?,
                SettingsCommand::ChangePassword { data } => {
                    emit(&api.change_password(&parse(&data)?, &opts).await?)?;
                }
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    // Logs go to stderr so command output on stdout stays machine-readable.
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn parse<T: DeserializeOwned>(raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).context("invalid JSON payload for --data")
}

#[allow(clippy::print_stdout)]
fn emit<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
