//! The create → label → comment sequence.
//!
//! The card is always created first; its `id` feeds the optional label and
//! comment calls, which run label before comment. Nothing is rolled back: a
//! failed follow-up leaves the card in place and the error says so.

use crate::{CardAnnotations, CardRequest, Client, ClientError};

use std::fmt;

use log::{error, info};
use serde_json::Value;
use thiserror::Error;

/// One API call in the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateCard,
    AddLabel,
    AddComment,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateCard => f.write_str("create card"),
            Step::AddLabel => f.write_str("add label"),
            Step::AddComment => f.write_str("add comment"),
        }
    }
}

/// Result of a completed step, handed to the reporter as soon as it exists
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    CardCreated(Value),
    LabelAdded(Value),
    CommentAdded(Value),
}

impl StepOutcome {
    pub fn step(&self) -> Step {
        match self {
            StepOutcome::CardCreated(_) => Step::CreateCard,
            StepOutcome::LabelAdded(_) => Step::AddLabel,
            StepOutcome::CommentAdded(_) => Step::AddComment,
        }
    }

    pub fn value(&self) -> &Value {
        match self {
            StepOutcome::CardCreated(v)
            | StepOutcome::LabelAdded(v)
            | StepOutcome::CommentAdded(v) => v,
        }
    }

    /// Prefix printed before the JSON
    pub fn heading(&self) -> &'static str {
        match self {
            StepOutcome::CardCreated(_) => "Card created",
            StepOutcome::LabelAdded(_) => "New label created and added",
            StepOutcome::CommentAdded(_) => "Comment added",
        }
    }
}

/// Everything a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowOutcome {
    pub card_id: String,
    pub card: Value,
    pub label: Option<Value>,
    pub comment: Option<Value>,
}

#[derive(Error, Debug)]
#[error("{step} failed{note}: {source}", note = card_note(.card_id))]
pub struct WorkflowError {
    pub step: Step,
    /// Set once the card exists, so the caller knows it was left behind
    pub card_id: Option<String>,
    #[source]
    pub source: ClientError,
}

fn card_note(card_id: &Option<String>) -> String {
    card_id
        .as_deref()
        .map(|id| format!(" (card {id} was created)"))
        .unwrap_or_default()
}

pub struct CardWorkflow<'a> {
    client: &'a Client,
    request: &'a CardRequest,
    annotations: &'a CardAnnotations,
}

impl<'a> CardWorkflow<'a> {
    pub fn new(
        client: &'a Client,
        request: &'a CardRequest,
        annotations: &'a CardAnnotations,
    ) -> Self {
        Self {
            client,
            request,
            annotations,
        }
    }

    /// Run each call in order, passing every outcome to `report` as it lands.
    pub async fn run<F>(&self, mut report: F) -> Result<WorkflowOutcome, WorkflowError>
    where
        F: FnMut(&StepOutcome),
    {
        let card = self
            .client
            .create_card(self.request)
            .await
            .map_err(|e| self.failed(Step::CreateCard, None, e))?;

        let card_id = match card.get("id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => {
                return Err(self.failed(Step::CreateCard, None, ClientError::missing_card_id()));
            }
        };
        info!("Card {} created on list {}", card_id, self.request.id_list);

        let outcome = StepOutcome::CardCreated(card.clone());
        report(&outcome);

        let label = match self.annotations.label {
            Some(ref label) => {
                let value = self
                    .client
                    .add_label(&card_id, &label.name, &label.color)
                    .await
                    .map_err(|e| self.failed(Step::AddLabel, Some(card_id.as_str()), e))?;
                info!("Label '{}' ({}) added to card {}", label.name, label.color, card_id);

                let outcome = StepOutcome::LabelAdded(value.clone());
                report(&outcome);
                Some(value)
            }
            None => None,
        };

        let comment = match self.annotations.comment {
            Some(ref text) => {
                let value = self
                    .client
                    .add_comment(&card_id, text)
                    .await
                    .map_err(|e| self.failed(Step::AddComment, Some(card_id.as_str()), e))?;
                info!("Comment added to card {}", card_id);

                let outcome = StepOutcome::CommentAdded(value.clone());
                report(&outcome);
                Some(value)
            }
            None => None,
        };

        Ok(WorkflowOutcome {
            card_id,
            card,
            label,
            comment,
        })
    }

    fn failed(&self, step: Step, card_id: Option<&str>, source: ClientError) -> WorkflowError {
        match card_id {
            Some(id) => error!("{} failed for card {}: {}", step, id, source),
            None => error!("{} failed: {}", step, source),
        }

        WorkflowError {
            step,
            card_id: card_id.map(String::from),
            source,
        }
    }
}
