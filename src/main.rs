mod bot;
mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod platform;
mod service;
mod state;

use tracing_subscriber::EnvFilter;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting bot (admin role: {}, join role: {})",
        config.admin_role_name,
        config.join_role_name
    );

    let client = init_bot(BotState::new(config)).await?;
    start_bot(client).await
}
