//! Terminal front end for the to-do board.
//!
//! Reads one command per line from stdin and repaints the board on stdout.
//! Logs go to stderr; set `RUST_LOG` to change the filter.

use anyhow::Context;
use std::io;
use std::sync::Arc;
use todo_board::{BoardState, Config, Painter, TodoEnvironment, TodoReducer, shell};
use todo_board_core::environment::SystemClock;
use todo_board_runtime::Store;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_board=info,todo_board_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(display = ?config.initial_display, color = config.color, "Starting to-do board");

    let env = TodoEnvironment::new(Arc::new(SystemClock));
    let store = Store::new(
        BoardState::with_display(config.initial_display),
        TodoReducer::new(),
        env,
    );

    let mut painter = Painter::new(io::stdout(), config.color);
    let result = shell::run(
        &store,
        &config.view,
        BufReader::new(tokio::io::stdin()),
        &mut painter,
    )
    .await;

    store.shutdown();
    result.context("Board session failed")?;

    info!("Board closed");
    Ok(())
}
