use clap::{ArgAction, Parser, builder::BoolishValueParser};

// Values stay raw strings here; `CardRequest::try_from` checks them so that
// every bad field is reported at once.
#[derive(Parser, Debug)]
#[command(name = "trello-card")]
#[command(about = "Add a card to a Trello board")]
#[command(version)]
pub struct Cli {
    /// The ID of the Trello list
    #[arg(long = "idList", short = 'i')]
    pub id_list: String,

    /// The API key of the Trello account (needs --auth_token too)
    #[arg(long = "api_key")]
    pub api_key: Option<String>,

    /// The OAuth token of the Trello account (needs --api_key too)
    #[arg(long = "auth_token")]
    pub auth_token: Option<String>,

    /// The name of the Trello card
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// The description of the Trello card
    #[arg(long, short = 'd')]
    pub desc: Option<String>,

    /// Position of the card in the list: top, bottom, or a number
    #[arg(long, short = 'p', allow_negative_numbers = true)]
    pub pos: Option<String>,

    /// The IDs of the labels to add (space-separated)
    #[arg(long = "idLabels", short = 'l', num_args = 1..)]
    pub id_labels: Option<Vec<String>>,

    /// The comment text
    #[arg(long = "comment_text", short = 'c')]
    pub comment_text: Option<String>,

    /// The name of the new label to create on the card
    #[arg(long = "label_name")]
    pub label_name: Option<String>,

    /// The color of the new label to create on the card
    #[arg(long = "label_color")]
    pub label_color: Option<String>,

    /// The IDs of the members to add (space-separated)
    #[arg(long = "idMembers", short = 'm', num_args = 1..)]
    pub id_members: Option<Vec<String>>,

    /// The start date for the card
    #[arg(long)]
    pub start: Option<String>,

    /// The due date for the card
    #[arg(long)]
    pub due: Option<String>,

    /// The due complete flag for the card (true/false)
    #[arg(long = "dueComplete", action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub due_complete: Option<bool>,

    /// The URL source for the card (starting with http:// or https://)
    #[arg(long = "urlSource", short = 'u')]
    pub url_source: Option<String>,

    /// The file source for the card
    #[arg(long = "fileSource", short = 'f')]
    pub file_source: Option<String>,

    /// The mime type for the card (max 256 characters)
    #[arg(long = "mimeType")]
    pub mime_type: Option<String>,

    /// The ID of a card to copy into the new card
    #[arg(long = "idCardSource")]
    pub id_card_source: Option<String>,

    /// Properties to copy from --idCardSource: all, attachments, checklists,
    /// customFields, comments, due, start, labels, members, stickers
    #[arg(long = "keepFromSource", num_args = 1..)]
    pub keep_from_source: Option<Vec<String>>,

    /// For use with/by the Map View
    #[arg(long)]
    pub address: Option<String>,

    /// For use with/by the Map View
    #[arg(long = "locationName")]
    pub location_name: Option<String>,

    /// For use with/by the Map View, as latitude,longitude
    #[arg(long, allow_hyphen_values = true)]
    pub coordinates: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}
