//! Single-page to-do board.
//!
//! A list of notes, each with a title, a description and an optional
//! completion time, plus the page around it: an add-note form, a filter that
//! narrows the list to completed notes, and a light/dark display mode.
//!
//! - Commands that change the list (`Add`, `CommitEdit`, `ToggleComplete`,
//!   `Remove`) are validated by [`TodoStore`]
//! - Intents (opening the form, editing scratch text, switching filter or
//!   display) only move session state
//! - [`render`] turns the state into a [`Screen`] that forwards list
//!   positions, so a filtered row always addresses the note it shows
//!
//! # Quick Start
//!
//! ```no_run
//! use todo_board::{BoardState, TodoAction, TodoEnvironment, TodoReducer};
//! use todo_board_core::environment::SystemClock;
//! use todo_board_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(BoardState::new(), TodoReducer::new(), env);
//!
//! store.send(TodoAction::ToggleForm).await?;
//! store.send(TodoAction::SetDraftTitle { title: "Buy milk".to_string() }).await?;
//! store.send(TodoAction::SetDraftDescription { description: "2%".to_string() }).await?;
//! store.send(TodoAction::SubmitForm).await?;
//!
//! store.send(TodoAction::ToggleComplete { position: 0 }).await?;
//!
//! let completed = store.state(|s| s.todos.completed_count()).await;
//! println!("Completed: {completed}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod reducer;
pub mod shell;
pub mod terminal;
pub mod todos;
pub mod types;
pub mod view;

pub use config::Config;
pub use error::{ConfigError, TodoError};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use shell::{BoardStore, ShellError};
pub use terminal::Painter;
pub use todos::TodoStore;
pub use types::{
    BoardState, DisplayMode, EditSession, FormDraft, SessionState, TodoAction, TodoItem,
    ViewFilter, VisibleItem,
};
pub use view::{Screen, ViewConfig, render};
