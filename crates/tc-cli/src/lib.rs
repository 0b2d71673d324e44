//! tc-cli library
//!
//! Argument validation, the Trello HTTP client and the create-card workflow.
//! The `trello-card` binary is a thin wrapper around these.

pub(crate) mod card_request;
pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod error;
pub mod logger;
pub mod output;
pub(crate) mod workflow;

#[cfg(test)]
mod tests;

pub use card_request::{
    CardAnnotations, CardRequest, KeepFromSource, LabelSpec, MAX_MIME_TYPE_LENGTH, Position,
    ValidationError, ValidationErrors,
};
pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use error::{AppError, Result as AppResult};
pub use workflow::{CardWorkflow, Step, StepOutcome, WorkflowError, WorkflowOutcome};
