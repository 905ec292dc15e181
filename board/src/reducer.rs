//! Reducer logic for the to-do board.
//!
//! List commands go through [`TodoStore`](crate::todos::TodoStore); intents
//! move the session flags. Submitting the form is a two-step flow: the form
//! hands its draft to the `Add` command through a feedback effect, and `Add`
//! closes the form only when the note is accepted.

use crate::error::TodoError;
use crate::types::{BoardState, FormDraft, TodoAction};
use std::sync::Arc;
use todo_board_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};

/// Environment dependencies for the board reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for completion timestamps
    pub clock: Arc<dyn Clock>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the to-do board
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add(state: &mut BoardState, title: String, description: String) {
        if state.todos.add(title, description) {
            state.session.form_visible = false;
            state.session.draft = FormDraft::default();
            tracing::info!(position = state.todos.len() - 1, "Note added");
        } else {
            tracing::debug!("Ignoring note with a blank title or description");
        }
    }
}

impl Reducer for TodoReducer {
    type State = BoardState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Error = TodoError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<SmallVec<[Effect<Self::Action>; 4]>, Self::Error> {
        match action {
            // ========== Commands ==========
            TodoAction::Add { title, description } => Self::add(state, title, description),

            TodoAction::CommitEdit => {
                let position = state.todos.commit_edit()?;
                tracing::info!(position, "Note updated");
            },

            TodoAction::ToggleComplete { position } => {
                let completed = state.todos.toggle_complete(position, env.clock.now())?;
                tracing::info!(position, completed, "Note completion toggled");
            },

            TodoAction::Remove { position } => {
                state.todos.remove(position)?;
                tracing::info!(position, "Note removed");
            },

            // ========== Intents ==========
            TodoAction::BeginEdit { position } => {
                state.todos.begin_edit(position)?;
                tracing::debug!(position, "Edit started");
            },

            TodoAction::SetScratchTitle { title } => state.todos.set_scratch_title(title)?,

            TodoAction::SetScratchDescription { description } => {
                state.todos.set_scratch_description(description)?;
            },

            TodoAction::CancelEdit => {
                if state.todos.cancel_edit() {
                    tracing::debug!("Edit cancelled");
                }
            },

            TodoAction::ToggleForm => {
                state.session.form_visible = !state.session.form_visible;
            },

            TodoAction::SetDraftTitle { title } => state.session.draft.title = title,

            TodoAction::SetDraftDescription { description } => {
                state.session.draft.description = description;
            },

            TodoAction::SubmitForm => {
                let FormDraft { title, description } = state.session.draft.clone();
                return Ok(smallvec![Effect::send(TodoAction::Add { title, description })]);
            },

            TodoAction::ToggleFilter => {
                state.session.filter = state.session.filter.toggled();
                tracing::debug!(filter = ?state.session.filter, "Filter changed");
            },

            TodoAction::ToggleDisplayMode => {
                state.session.display = state.session.display.toggled();
            },
        }

        Ok(SmallVec::new())
    }
}
