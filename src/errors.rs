//! Unified application error type.
//! All modules (feed, render, compose, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Feed
    // ---------------------------
    #[error("Earthquake feed unavailable: {0}")]
    FeedUnavailable(String),

    #[error("Malformed event {id}: {reason}")]
    MalformedEvent { id: String, reason: String },

    // ---------------------------
    // Map rendering
    // ---------------------------
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type AppResult<T> = Result<T, AppError>;
