//! Holocron - terminal browser for the Star Wars character catalog.
//!
//! Reads commands from standard input, one per line. Logs go to standard
//! error so they never interleave with rendered pages.

mod app;
mod command;
mod settings;
mod view;

use std::sync::Arc;

use anyhow::Context;
use holocron_auth::{AuthService, FileStore, Session};
use holocron_core::{Catalog, FetchClient};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Reply};
use command::Command;
use settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holocron=info,holocron_core=info,holocron_auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Holocron");

    let settings = Settings::load().await;
    info!("Using API at {}", settings.base_url);

    let store = FileStore::open(settings::session_path()).context("opening session store")?;
    let service = AuthService::new(store).with_config(settings.auth_config());
    let session = Session::new(Arc::new(service));

    let client = FetchClient::http(settings.catalog_config()).context("building HTTP client")?;
    let catalog = Catalog::new(client).context("invalid base URL")?;

    let app = App::new(session, catalog);
    let mut stdout = tokio::io::stdout();
    write_block(&mut stdout, &app.start().await?).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt(&mut stdout).await?;
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Ok(Some(command)) => match app.run(command).await? {
                Reply::Print(text) => write_block(&mut stdout, &text).await?,
                Reply::Quit => break,
            },
            Ok(None) => {}
            Err(message) => write_block(&mut stdout, &message).await?,
        }
        prompt(&mut stdout).await?;
    }

    info!("Goodbye");
    Ok(())
}

async fn write_block(out: &mut tokio::io::Stdout, text: &str) -> std::io::Result<()> {
    out.write_all(text.trim_end().as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

async fn prompt(out: &mut tokio::io::Stdout) -> std::io::Result<()> {
    out.write_all(b"holocron> ").await?;
    out.flush().await
}
