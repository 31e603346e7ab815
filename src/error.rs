// SPDX-License-Identifier: PMPL-1.0-or-later

//! Library error type

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid locale table: {0}")]
    InvalidLocaleTable(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("records file {}: {}", .path.display(), .message)]
    Records { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
