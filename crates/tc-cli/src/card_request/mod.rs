pub(crate) mod annotations;
pub(crate) mod card_request;
pub(crate) mod keep_from_source;
pub(crate) mod position;
pub(crate) mod validation_error;
pub(crate) mod validators;

pub use annotations::{CardAnnotations, LabelSpec};
pub use card_request::CardRequest;
pub use keep_from_source::KeepFromSource;
pub use position::Position;
pub use validation_error::{ValidationError, ValidationErrors};
pub use validators::MAX_MIME_TYPE_LENGTH;
