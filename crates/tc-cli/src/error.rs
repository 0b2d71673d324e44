use crate::{ClientError, WorkflowError};

use thiserror::Error;

/// Top-level failure of a `trello-card` run
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] tc_config::ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
