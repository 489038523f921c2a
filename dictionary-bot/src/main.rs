use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dictionary::{Command, Dictionary, LookupRequest, Reply};
use tracing_subscriber::{fmt, EnvFilter};
use utilities::{closest_command, input};

mod config;
mod utilities;

#[derive(Parser, Debug)]
#[command(
    name = "dictionary-bot",
    about = "Look up definitions, etymology, pronunciation audio and related words.",
    long_about = "Look up definitions, etymology, pronunciation audio and related words.\n\
                  Without a subcommand, commands are read from a prompt.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<LookupCommand>,
    /// TOML configuration file, `dictionary-bot.toml` in the working directory by default.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum LookupCommand {
    /// Definitions of a word
    Define { word: Vec<String> },
    /// Origin of a word
    Etymology { word: Vec<String> },
    /// Link to a pronunciation recording
    Pronounce { word: Vec<String> },
    /// Synonyms, antonyms and related words
    Thesaurus { word: Vec<String> },
}

impl LookupCommand {
    fn into_parts(self) -> (Command, Vec<String>) {
        match self {
            LookupCommand::Define { word } => (Command::Define, word),
            LookupCommand::Etymology { word } => (Command::Etymology, word),
            LookupCommand::Pronounce { word } => (Command::Pronounce, word),
            LookupCommand::Thesaurus { word } => (Command::Thesaurus, word),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = config::load_config(cli.config.as_deref())?;
    let dict = Dictionary::new(config);
    tracing::info!(
        provider = ?dict.config().provider,
        markup = ?dict.config().markup,
        "dictionary ready"
    );

    match cli.command {
        Some(command) => {
            let (command, word) = command.into_parts();
            if !respond(&dict, command, &word).await {
                std::process::exit(1);
            }
        }
        None => prompt(&dict).await?,
    }
    Ok(())
}

async fn prompt(dict: &Dictionary) -> anyhow::Result<()> {
    loop {
        let line = input(">> ")?;
        // read_line gives an empty string only at end of input
        if line.is_empty() {
            break;
        }
        let mut command_parts = line.trim().split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                    break;
                }
                other => match other.parse::<Command>() {
                    Ok(command) => {
                        respond(dict, command, &command_parts.collect::<Vec<&str>>()).await;
                    }
                    Err(_) => match closest_command(other) {
                        Some(guess) => println!("Unknown command {other}. Did you mean {guess}?"),
                        None => println!("Unknown command {other}."),
                    },
                },
            }
        }
    }
    Ok(())
}

/// Runs one look-up and prints the reply, returns whether it succeeded.
async fn respond<S: AsRef<str>>(dict: &Dictionary, command: Command, word: &[S]) -> bool {
    let reply = match LookupRequest::new(command, word) {
        Ok(request) => dict.lookup(&request).await,
        Err(error) => Err(error),
    };
    match reply {
        Ok(Reply::Text(text)) => {
            println!("{text}");
            true
        }
        Ok(Reply::Audio(audio)) => {
            println!("🎙 uploading audio...");
            println!("{}", audio.caption);
            println!(
                "{} (upload timeout {}s)",
                audio.url,
                audio.timeout.as_secs()
            );
            true
        }
        Err(error) => {
            tracing::debug!(%command, kind = ?error.kind(), %error, "look-up failed");
            println!("{}", error.user_message());
            false
        }
    }
}
