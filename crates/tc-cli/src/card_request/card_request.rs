use crate::Cli;
use crate::card_request::validators::{
    validate_keep_from_source, validate_mime_type, validate_position, validate_url_source,
};
use crate::card_request::{KeepFromSource, Position, ValidationError, ValidationErrors};

/// Everything sent to `POST /cards` for one new card.
///
/// Every optional field stays `None` unless it was given on the command
/// line, so Trello's own defaults apply to anything left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardRequest {
    pub id_list: String,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub pos: Option<Position>,
    pub id_labels: Option<Vec<String>>,
    pub id_members: Option<Vec<String>>,
    pub start: Option<String>,
    pub due: Option<String>,
    pub due_complete: Option<bool>,
    pub url_source: Option<String>,
    pub file_source: Option<String>,
    pub mime_type: Option<String>,
    pub id_card_source: Option<String>,
    pub keep_from_source: Option<Vec<KeepFromSource>>,
    pub address: Option<String>,
    pub location_name: Option<String>,
    pub coordinates: Option<String>,
}

impl CardRequest {
    /// A request for `id_list` with no optional fields
    pub fn new(id_list: impl Into<String>) -> Self {
        Self {
            id_list: id_list.into(),
            ..Self::default()
        }
    }

    /// Query parameters for `POST /cards`, using Trello's field names.
    ///
    /// `idList` comes first, followed by each present field in a fixed
    /// order. Multi-valued fields are joined with commas.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("idList", self.id_list.clone())];

        push(&mut params, "name", self.name.clone());
        push(&mut params, "desc", self.desc.clone());
        push(&mut params, "pos", self.pos.map(|p| p.to_string()));
        push(&mut params, "idLabels", self.id_labels.as_deref().map(join));
        push(&mut params, "idMembers", self.id_members.as_deref().map(join));
        push(&mut params, "start", self.start.clone());
        push(&mut params, "due", self.due.clone());
        push(
            &mut params,
            "dueComplete",
            self.due_complete.map(|b| b.to_string()),
        );
        push(&mut params, "urlSource", self.url_source.clone());
        push(&mut params, "fileSource", self.file_source.clone());
        push(&mut params, "mimeType", self.mime_type.clone());
        push(&mut params, "idCardSource", self.id_card_source.clone());
        push(
            &mut params,
            "keepFromSource",
            self.keep_from_source.as_deref().map(|kfs| {
                kfs.iter()
                    .map(KeepFromSource::as_str)
                    .collect::<Vec<_>>()
                    .join(",")
            }),
        );
        push(&mut params, "address", self.address.clone());
        push(&mut params, "locationName", self.location_name.clone());
        push(&mut params, "coordinates", self.coordinates.clone());

        params
    }
}

fn push(params: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<String>) {
    if let Some(value) = value {
        params.push((name, value));
    }
}

fn join(values: &[String]) -> String {
    values.join(",")
}

/// Keep the Ok value, or remember the error and carry on.
fn check<T>(result: Result<T, ValidationError>, errors: &mut Vec<ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

impl TryFrom<&Cli> for CardRequest {
    type Error = ValidationErrors;

    /// Run every field rule, collecting all failures before giving up.
    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let pos = cli
            .pos
            .as_deref()
            .and_then(|v| check(validate_position(v), &mut errors));
        let url_source = cli
            .url_source
            .as_deref()
            .and_then(|v| check(validate_url_source(v), &mut errors));
        let mime_type = cli
            .mime_type
            .as_deref()
            .and_then(|v| check(validate_mime_type(v), &mut errors));
        let keep_from_source = cli
            .keep_from_source
            .as_deref()
            .and_then(|v| check(validate_keep_from_source(v), &mut errors));

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        Ok(Self {
            id_list: cli.id_list.clone(),
            name: cli.name.clone(),
            desc: cli.desc.clone(),
            pos,
            id_labels: cli.id_labels.clone(),
            id_members: cli.id_members.clone(),
            start: cli.start.clone(),
            due: cli.due.clone(),
            due_complete: cli.due_complete,
            url_source,
            file_source: cli.file_source.clone(),
            mime_type,
            id_card_source: cli.id_card_source.clone(),
            keep_from_source,
            address: cli.address.clone(),
            location_name: cli.location_name.clone(),
            coordinates: cli.coordinates.clone(),
        })
    }
}
