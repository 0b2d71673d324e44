use std::fmt;

/// Card properties Trello copies when creating from `idCardSource`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeepFromSource {
    All,
    Attachments,
    Checklists,
    CustomFields,
    Comments,
    Due,
    Start,
    Labels,
    Members,
    Stickers,
}

impl KeepFromSource {
    pub const ALL: [KeepFromSource; 10] = [
        KeepFromSource::All,
        KeepFromSource::Attachments,
        KeepFromSource::Checklists,
        KeepFromSource::CustomFields,
        KeepFromSource::Comments,
        KeepFromSource::Due,
        KeepFromSource::Start,
        KeepFromSource::Labels,
        KeepFromSource::Members,
        KeepFromSource::Stickers,
    ];

    /// Trello's spelling of the token
    pub fn as_str(&self) -> &'static str {
        match self {
            KeepFromSource::All => "all",
            KeepFromSource::Attachments => "attachments",
            KeepFromSource::Checklists => "checklists",
            KeepFromSource::CustomFields => "customFields",
            KeepFromSource::Comments => "comments",
            KeepFromSource::Due => "due",
            KeepFromSource::Start => "start",
            KeepFromSource::Labels => "labels",
            KeepFromSource::Members => "members",
            KeepFromSource::Stickers => "stickers",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kfs| kfs.as_str() == token)
    }

    /// Comma-separated list of accepted tokens, for error messages
    pub fn expected() -> String {
        Self::ALL
            .iter()
            .map(KeepFromSource::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for KeepFromSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
