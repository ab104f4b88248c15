use std::io::Write;
use std::sync::Arc;

use crate::clients::completion::OpenAiCompatibleClient;
use crate::config::Config;
use crate::services::{
    Assistant, AssistantError, ChatSession, ContextError, ResidentService, SeaOrmContextService,
    SeaOrmResidentService,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use super::{credentials, open_store};

pub async fn cmd_chat(config: &Config, token_override: Option<&str>) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let residents = SeaOrmResidentService::new(store.clone());

    let Some(token) = credentials(config, token_override)?
        .current_token()
        .await?
    else {
        println!("No device token found. Check in first.");
        return Ok(());
    };

    let Some(resident) = residents.resolve_resident(&token).await? else {
        println!("Device token is not valid (unknown or checked out).");
        return Ok(());
    };

    let completion = OpenAiCompatibleClient::from_config(&config.assistant)?;
    let assistant = Assistant::new(
        Arc::new(SeaOrmContextService::new(store)),
        Arc::new(completion),
        config.prompt.clone(),
    );

    let mut session = ChatSession::new(
        resident.room_number.clone(),
        config.assistant.history_limit,
        config.assistant.session_idle_ttl()?,
    );

    println!("{}", assistant.greeting(Some(&resident)));
    println!("(type 'exit' to leave)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        match assistant.reply(&mut session, input).await {
            Ok(reply) => println!("{}: {reply}", assistant.template().assistant_name),
            Err(AssistantError::Context(ContextError::RoomNotFound(room))) => {
                println!("Room {room} not found.");
                break;
            }
            Err(e) => {
                warn!(error = %e, "Assistant reply failed");
                println!("Sorry, something went wrong: {e}");
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
