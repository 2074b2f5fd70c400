//! Application state

use crate::config::Config;
use crate::error::ApiError;
use anyhow::{Context, Result};
use shelf_core::Shelf;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The served library
    pub shelf: Arc<Shelf>,

    /// Settings the server was started with
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state, checking that the library root exists
    pub fn new(config: Config) -> Result<Self> {
        let shelf = Shelf::open(&config.dir)
            .with_context(|| format!("Cannot serve {}", config.dir.display()))?;

        Ok(Self {
            shelf: Arc::new(shelf),
            config: Arc::new(config),
        })
    }

    /// Run a blocking shelf operation off the async runtime
    pub async fn with_shelf<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Shelf) -> shelf_core::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let shelf = Arc::clone(&self.shelf);
        Ok(tokio::task::spawn_blocking(move || op(&shelf)).await??)
    }
}
