use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use zeal_client::hint::LOADING_TEXT;
use zeal_client::net::api::{DEFAULT_RELAY_URL, DEFAULT_TIMEOUT_SECS};
use zeal_client::render::{render_cards, render_message, render_transcript};
use zeal_client::{ApiError, AskTransport, ChatSession, RelayClient, SubmitError};

const QUIT_COMMANDS: [&str; 3] = ["/quit", "/exit", ":q"];

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("relay: {0}")]
    Api(#[from] ApiError),
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "zeal", about = "Zeal AI: ask me about restaurants")]
struct Cli {
    #[arg(long, env = "ZEAL_RELAY_URL", default_value = DEFAULT_RELAY_URL)]
    relay_url: String,

    #[arg(long, env = "ZEAL_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Interactive chat (default).
    Chat,
    /// Ask one question and print the reply.
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Search restaurant names on the relay.
    Search { query: String },
    /// Check that the relay is up.
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let client = RelayClient::new(&cli.relay_url, Duration::from_secs(cli.timeout_secs))?;

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let stdin = BufReader::new(tokio::io::stdin());
            run_chat(ChatSession::new(client), stdin, &mut io::stdout()).await
        }
        Command::Ask { query } => run_ask(ChatSession::new(client), &query.join(" "), &mut io::stdout()).await,
        Command::Search { query } => run_search(&client, &query, &mut io::stdout()).await,
        Command::Ping => run_ping(&client, &mut io::stdout()).await,
    }
}

/// Read queries line by line until EOF or a quit command, printing each
/// exchange as it completes.
async fn run_chat<T, R, W>(mut session: ChatSession<T>, input: R, out: &mut W) -> Result<(), CliError>
where
    T: AskTransport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", render_transcript(session.state()))?;
    let mut lines = input.lines();

    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if QUIT_COMMANDS.contains(&line) {
            break;
        }

        if let Err(e) = submit_and_print(&mut session, line, out).await? {
            tracing::debug!(error = %e, "submission rejected");
        }
    }
    writeln!(out)?;
    Ok(())
}

async fn run_ask<T, W>(mut session: ChatSession<T>, query: &str, out: &mut W) -> Result<(), CliError>
where
    T: AskTransport,
    W: Write,
{
    if let Err(e) = submit_and_print(&mut session, query, out).await? {
        writeln!(out, "{e}")?;
    }
    Ok(())
}

/// Submit one line; the inner result is the session's verdict on the input.
async fn submit_and_print<T, W>(
    session: &mut ChatSession<T>,
    query: &str,
    out: &mut W,
) -> Result<Result<(), SubmitError>, CliError>
where
    T: AskTransport,
    W: Write,
{
    if query.trim().is_empty() {
        return Ok(Err(SubmitError::EmptyQuery));
    }

    writeln!(out, "{LOADING_TEXT}")?;
    out.flush()?;

    match session.submit(query).await {
        Ok(appended) => {
            for message in appended {
                writeln!(out, "\n{}", render_message(message))?;
            }
            Ok(Ok(()))
        }
        Err(e) => Ok(Err(e)),
    }
}

async fn run_search<W: Write>(client: &RelayClient, query: &str, out: &mut W) -> Result<(), CliError> {
    let cards = client.search(query).await?;
    if cards.is_empty() {
        writeln!(out, "No restaurants match \"{query}\".")?;
    } else {
        writeln!(out, "{}", render_cards(&cards))?;
    }
    Ok(())
}

async fn run_ping<W: Write>(client: &RelayClient, out: &mut W) -> Result<(), CliError> {
    client.health().await?;
    writeln!(out, "ok")?;
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
