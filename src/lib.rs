pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod exercise;
pub mod models;
pub mod store;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use log::info;

use auth::Auth;
use config::Config;
use models::Role;
use store::{seed, SqliteStore};

/// Opens the database, creates and seeds it if needed, and builds the router.
pub async fn build_app(config: &Config) -> Result<Router> {
    let store = SqliteStore::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    let auth = Auth::from_config(config).context("invalid auth settings")?;

    prepare_store(&store, &auth).await?;

    let state = api::AppState::new(Arc::new(store), auth, config.max_exercise_count);
    Ok(api::router(state))
}

pub async fn prepare_store(store: &SqliteStore, auth: &Auth) -> Result<()> {
    store.migrate().await.context("failed to create schema")?;
    store
        .seed_reference_data()
        .await
        .context("failed to seed reference data")?;

    if store.find_user_by_username(seed::ADMIN_USERNAME).await?.is_none() {
        let hash = auth.hash_password(seed::ADMIN_PASSWORD)?;
        store
            .create_user(seed::ADMIN_USERNAME, seed::ADMIN_EMAIL, &hash, Role::Admin)
            .await
            .context("failed to create admin user")?;
        info!("created default admin user '{}'", seed::ADMIN_USERNAME);
    }
    Ok(())
}
