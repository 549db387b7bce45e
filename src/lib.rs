pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod rating;
pub mod services;
pub mod store;
pub mod views;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use log::info;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::AccessMode;
use crate::services::publishing::PublishService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_publish() -> Result<()> {
    let service = PublishService::new(AppConfig::from_env());
    service.run()
}

pub fn handle_init_db() -> Result<()> {
    let config = AppConfig::from_env();
    let pool = database::create_pool(&config.storage.database_path, AccessMode::ReadWrite)?;
    let conn = database::get_connection(&pool)?;
    database::setup::ensure_schema(&conn)?;
    info!("Database ready at {}", config.storage.database_path);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, env!("CARGO_PKG_NAME"), &mut std::io::stdout());
    Ok(())
}
