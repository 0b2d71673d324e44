//! trello-card - create a Trello card from the command line
//!
//! Creates a card on a list, then optionally creates a label on it and posts
//! a comment.
//!
//! # Examples
//!
//! ```bash
//! # Card with a name at the top of a list
//! trello-card --idList 5f2 --name "Fix login" --pos top
//!
//! # Card plus a red "Urgent" label and a comment
//! trello-card --idList 5f2 --name "Outage" --label_name Urgent --label_color red \
//!     --comment_text "Paging on-call"
//! ```

use tc_cli::{AppResult, CardAnnotations, CardRequest, CardWorkflow, Cli, Client, logger, output};
use tc_config::Config;

use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Reject bad values before loading config or touching the network
    let request = match CardRequest::try_from(&cli) {
        Ok(request) => request,
        Err(errors) => Cli::command()
            .error(ErrorKind::ValueValidation, errors)
            .exit(),
    };

    match run(&cli, &request).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, request: &CardRequest) -> AppResult<()> {
    let mut config = Config::load()?;
    logger::initialize(&config.logging)?;

    config.apply_credential_flags(cli.api_key.as_deref(), cli.auth_token.as_deref());
    config.validate()?;
    config.log_summary();

    let client = Client::new(
        &config.trello.base_url,
        config.credentials(),
        config.trello.timeout(),
    )?;
    let annotations = CardAnnotations::from(cli);

    CardWorkflow::new(&client, request, &annotations)
        .run(|outcome| output::print_step(outcome, cli.pretty))
        .await?;

    Ok(())
}
