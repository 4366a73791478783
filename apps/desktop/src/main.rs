use anyhow::{Context, Result};
use clap::Parser;
use client_core::intake_from_url;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

mod command;
mod session;

use command::{Command, USAGE};
use session::{Outcome, Session};

#[derive(Parser, Debug)]
#[command(name = "address-book", about = "Terminal address book form")]
struct Args {
    /// Base url of the intake server; submissions are forwarded when set.
    #[arg(long, env = "ADDRESS_INTAKE_URL")]
    intake_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let intake = intake_from_url(args.intake_url.as_deref()).context("invalid --intake-url")?;
    let mut session = Session::new(intake);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    stdout.write_all(format!("{USAGE}\n> ").as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let output = match line.parse::<Command>() {
            Ok(command) => match session.apply(command) {
                Outcome::Print(text) => text,
                Outcome::Quit => break,
            },
            Err(command::CommandError::Empty) => String::new(),
            Err(error) => format!("{error}\n(type 'help' for commands)\n"),
        };
        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
