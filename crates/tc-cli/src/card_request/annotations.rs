use crate::Cli;

use log::warn;

/// A new label to create on the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSpec {
    pub name: String,
    pub color: String,
}

/// Follow-up calls made against the new card once it exists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardAnnotations {
    pub label: Option<LabelSpec>,
    pub comment: Option<String>,
}

impl CardAnnotations {
    pub fn new(label: Option<LabelSpec>, comment: Option<String>) -> Self {
        Self { label, comment }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.comment.is_none()
    }
}

impl From<&Cli> for CardAnnotations {
    /// A label needs both a name and a color; half of one is dropped.
    fn from(cli: &Cli) -> Self {
        let label = match (&cli.label_name, &cli.label_color) {
            (Some(name), Some(color)) => Some(LabelSpec {
                name: name.clone(),
                color: color.clone(),
            }),
            (Some(_), None) => {
                warn!("--label_name given without --label_color; no label will be created");
                None
            }
            (None, Some(_)) => {
                warn!("--label_color given without --label_name; no label will be created");
                None
            }
            (None, None) => None,
        };

        Self {
            label,
            comment: cli.comment_text.clone(),
        }
    }
}
