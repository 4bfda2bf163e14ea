//! Library server
//!
//! A REST JSON API for managing people and the books they own.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod converter;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use converter::Converter;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub converter: Converter,
}
