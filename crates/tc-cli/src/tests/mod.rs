
use crate::Cli;

use clap::Parser;

/// Parse `args` as if typed after `trello-card`
pub(crate) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("trello-card").chain(args.iter().copied())).unwrap()
}
