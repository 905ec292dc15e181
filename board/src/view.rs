//! The board's page as data.
//!
//! [`render`] is a pure function of [`BoardState`]. It produces a [`Screen`]
//! describing every control, the add-note form and the visible rows. Each
//! control and row action maps back to the [`TodoAction`] it triggers, using
//! the list positions the screen was built from.

use crate::types::{BoardState, DisplayMode, EditSession, TodoAction, ViewFilter};
use chrono::{DateTime, Local, Utc};
use std::fmt::Write as _;

/// Page heading
pub const HEADING: &str = "To-Do List";

/// Heading of the add-note form
pub const FORM_HEADING: &str = "Add a New Note";

/// Default timestamp format for completed notes
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How timestamps are shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// `chrono` format string for completion timestamps
    pub time_format: String,
    /// Show timestamps in local time rather than UTC
    pub local_time: bool,
}

impl ViewConfig {
    /// Set the timestamp format
    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    /// Choose local time or UTC
    #[must_use]
    pub const fn with_local_time(mut self, local_time: bool) -> Self {
        self.local_time = local_time;
        self
    }

    /// Formats a completion timestamp
    ///
    /// Falls back to RFC 3339 if the format string cannot be applied.
    #[must_use]
    pub fn format_timestamp(&self, at: DateTime<Utc>) -> String {
        let mut out = String::new();
        let written = if self.local_time {
            write!(out, "{}", at.with_timezone(&Local).format(&self.time_format))
        } else {
            write!(out, "{}", at.format(&self.time_format))
        };
        if written.is_err() {
            return at.to_rfc3339();
        }
        out
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            local_time: true,
        }
    }
}

/// Page-level toggle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Light/dark switch
    DisplayMode,
    /// Opens or closes the add-note form
    Form,
    /// All/completed-only switch
    Filter,
}

/// A labelled toggle button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Which toggle this is
    pub kind: ControlKind,
    /// Button text
    pub label: &'static str,
}

impl Control {
    /// The action this control sends
    #[must_use]
    pub const fn action(&self) -> TodoAction {
        match self.kind {
            ControlKind::DisplayMode => TodoAction::ToggleDisplayMode,
            ControlKind::Form => TodoAction::ToggleForm,
            ControlKind::Filter => TodoAction::ToggleFilter,
        }
    }
}

/// The open add-note form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Form heading
    pub heading: &'static str,
    /// Draft title
    pub title: String,
    /// Draft description
    pub description: String,
}

impl FormView {
    /// Action sent by Submit
    #[must_use]
    pub const fn submit_action(&self) -> TodoAction {
        TodoAction::SubmitForm
    }

    /// Action sent by Cancel
    #[must_use]
    pub const fn cancel_action(&self) -> TodoAction {
        TodoAction::ToggleForm
    }
}

/// What a row shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowBody {
    /// The note under edit, showing the scratch values
    Editing {
        /// Scratch title
        title: String,
        /// Scratch description
        description: String,
    },
    /// Any other note
    ReadOnly {
        /// Title
        title: String,
        /// Description
        description: String,
        /// Checkbox state; completed rows are struck through
        completed: bool,
        /// "Completed on: ..." line, present for completed notes
        completed_on: Option<String>,
    },
}

/// One visible note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based row number on this screen
    pub number: usize,
    /// Position of the note in the full list
    pub position: usize,
    /// Row contents
    pub body: RowBody,
}

impl Row {
    /// Whether this row is the one being edited
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.body, RowBody::Editing { .. })
    }

    /// Action sent by the completion checkbox
    #[must_use]
    pub const fn toggle_action(&self) -> TodoAction {
        TodoAction::ToggleComplete {
            position: self.position,
        }
    }

    /// Action sent by Edit
    #[must_use]
    pub const fn edit_action(&self) -> TodoAction {
        TodoAction::BeginEdit {
            position: self.position,
        }
    }

    /// Action sent by Delete
    #[must_use]
    pub const fn delete_action(&self) -> TodoAction {
        TodoAction::Remove {
            position: self.position,
        }
    }
}

/// The whole page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Palette to paint with
    pub display: DisplayMode,
    /// Page heading
    pub heading: &'static str,
    /// Display, form and filter toggles, in page order
    pub controls: Vec<Control>,
    /// The add-note form, when open
    pub form: Option<FormView>,
    /// Visible notes, in list order
    pub rows: Vec<Row>,
}

impl Screen {
    /// Row with the given 1-based number
    #[must_use]
    pub fn row(&self, number: usize) -> Option<&Row> {
        self.rows.iter().find(|row| row.number == number)
    }

    /// The row being edited, if it is visible
    #[must_use]
    pub fn editing_row(&self) -> Option<&Row> {
        self.rows.iter().find(|row| row.is_editing())
    }

    /// Control of the given kind
    #[must_use]
    pub fn control(&self, kind: ControlKind) -> Option<&Control> {
        self.controls.iter().find(|control| control.kind == kind)
    }
}

/// Renders the board
#[must_use]
pub fn render(state: &BoardState, config: &ViewConfig) -> Screen {
    let session = &state.session;

    let controls = vec![
        Control {
            kind: ControlKind::DisplayMode,
            label: match session.display {
                DisplayMode::Light => "Dark Mode",
                DisplayMode::Dark => "Light Mode",
            },
        },
        Control {
            kind: ControlKind::Form,
            label: if session.form_visible { "Cancel" } else { "Add Note" },
        },
        Control {
            kind: ControlKind::Filter,
            label: match session.filter {
                ViewFilter::All => "filter",
                ViewFilter::CompletedOnly => "Show All",
            },
        },
    ];

    let form = session.form_visible.then(|| FormView {
        heading: FORM_HEADING,
        title: session.draft.title.clone(),
        description: session.draft.description.clone(),
    });

    let edit = state.todos.edit_session();
    let rows = state
        .todos
        .visible_items(session.filter)
        .into_iter()
        .enumerate()
        .map(|(index, visible)| {
            let body = match edit {
                EditSession::Editing {
                    position,
                    scratch_title,
                    scratch_description,
                } if *position == visible.position => RowBody::Editing {
                    title: scratch_title.clone(),
                    description: scratch_description.clone(),
                },
                _ => RowBody::ReadOnly {
                    title: visible.item.title.clone(),
                    description: visible.item.description.clone(),
                    completed: visible.item.is_completed(),
                    completed_on: visible
                        .item
                        .completed_at()
                        .map(|at| format!("Completed on: {}", config.format_timestamp(at))),
                },
            };
            Row {
                number: index + 1,
                position: visible.position,
                body,
            }
        })
        .collect();

    Screen {
        display: session.display,
        heading: HEADING,
        controls,
        form,
        rows,
    }
}
