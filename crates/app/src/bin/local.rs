// Chateai - local command-line shell over the chat-history store

use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::{error, info};

use chateai_common::config::Config;
use chateai_conversations::ChatCore;

#[derive(Debug, Parser)]
#[command(name = "local", about = "Inspect and edit the local chat-history store")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a conversation and print its id
    CreateConversation { name: String },
    /// List conversations, newest first
    ListConversations,
    /// Rename a conversation
    RenameConversation {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        name: String,
    },
    /// Delete a conversation and its messages (Ctrl+C rolls back)
    DeleteConversation {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Append a message to a conversation
    CreateMessage {
        conversation_id: i64,
        role: String,
        content: String,
    },
    /// List messages, optionally for a single conversation
    ListMessages {
        #[arg(long)]
        conversation: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;
    chateai_app::init_tracing(&config)?;

    let core = chateai_app::bootstrap(&config).await.map_err(|e| {
        error!("Failed to open chat store: {}", e);
        e
    })?;

    let json = run(&core, cli.command).await.map_err(|e| {
        error!(code = e.error_code(), error = %e, "Operation failed");
        e
    })?;

    println!("{}", json);
    Ok(())
}

async fn run(core: &ChatCore, command: Command) -> chateai_common::Result<String> {
    match command {
        Command::CreateConversation { name } => core.create_conversation(&name).await?.to_json(),
        Command::ListConversations => core.list_conversations().await?.to_json(),
        Command::RenameConversation { id, name } => {
            core.rename_conversation(id, &name).await?.to_json()
        }
        Command::DeleteConversation { id } => core
            .delete_conversation_until(id, interrupted())
            .await?
            .to_json(),
        Command::CreateMessage {
            conversation_id,
            role,
            content,
        } => core
            .create_message(conversation_id, &role, &content)
            .await?
            .to_json(),
        Command::ListMessages {
            conversation: Some(id),
        } => core.list_messages_by_conversation(id).await?.to_json(),
        Command::ListMessages { conversation: None } => core.list_messages().await?.to_json(),
    }
}

/// Resolves on Ctrl+C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, cancelling");
}
