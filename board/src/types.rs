//! Domain types for the to-do board.
//!
//! A board is an ordered list of notes plus the presentation flags the page
//! needs: whether the add form is open, what it currently holds, which filter
//! is active and whether the page is dark.

use crate::todos::TodoStore;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use todo_board_macros::Action;

/// A single note
///
/// Completion is stored as the completion time alone, so "completed" and
/// "has a completion time" cannot disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    /// Title of the note
    pub title: String,
    /// Free-form description
    pub description: String,
    completed_at: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Creates a new, incomplete note
    #[must_use]
    pub const fn new(title: String, description: String) -> Self {
        Self {
            title,
            description,
            completed_at: None,
        }
    }

    /// Whether the note is completed
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// When the note was last marked completed, if it currently is
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Marks the note completed at `at`
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.completed_at = Some(at);
    }

    /// Marks the note incomplete and forgets the completion time
    pub fn reopen(&mut self) {
        self.completed_at = None;
    }
}

impl Serialize for TodoItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut item = serializer.serialize_struct("TodoItem", 4)?;
        item.serialize_field("title", &self.title)?;
        item.serialize_field("description", &self.description)?;
        item.serialize_field("completed", &self.is_completed())?;
        item.serialize_field("completed_at", &self.completed_at)?;
        item.end()
    }
}

/// The in-progress edit of one note
///
/// Scratch values live here until the edit is committed, so abandoning an
/// edit never touches the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditSession {
    /// No note is being edited
    #[default]
    None,
    /// The note at `position` is being edited
    Editing {
        /// List position of the note under edit
        position: usize,
        /// Title as currently typed
        scratch_title: String,
        /// Description as currently typed
        scratch_description: String,
    },
}

impl EditSession {
    /// Position under edit, if any
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Editing { position, .. } => Some(*position),
        }
    }

    /// Whether the note at `position` is the one being edited
    #[must_use]
    pub fn is_editing(&self, position: usize) -> bool {
        self.position() == Some(position)
    }
}

/// Which notes the list shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewFilter {
    /// Every note
    #[default]
    All,
    /// Only completed notes
    CompletedOnly,
}

impl ViewFilter {
    /// The other filter
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::CompletedOnly,
            Self::CompletedOnly => Self::All,
        }
    }
}

/// Light or dark page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Light palette
    #[default]
    Light,
    /// Dark palette
    Dark,
}

impl DisplayMode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Contents of the add-note form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDraft {
    /// Title as typed
    pub title: String,
    /// Description as typed
    pub description: String,
}

/// Presentation flags owned by the page, not by the list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the add-note form is open
    pub form_visible: bool,
    /// Active list filter
    pub filter: ViewFilter,
    /// Light or dark page
    pub display: DisplayMode,
    /// Add-note form contents; kept across a rejected submit
    pub draft: FormDraft,
}

/// Whole-board state handled by the reducer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    /// Notes and the active edit session
    pub todos: TodoStore,
    /// Presentation flags
    pub session: SessionState,
}

impl BoardState {
    /// Creates an empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty board starting in the given display mode
    #[must_use]
    pub fn with_display(display: DisplayMode) -> Self {
        let mut state = Self::new();
        state.session.display = display;
        state
    }
}

/// One entry of [`TodoStore::visible_items`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleItem<'a> {
    /// Position of the note in the full list
    pub position: usize,
    /// The note itself
    pub item: &'a TodoItem,
}

/// Everything a user can do on the board
///
/// Commands change the stored list. Intents only move the session, the edit
/// scratch, or the display flags.
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    // ========== Commands ==========
    /// Append a note; ignored unless both fields are non-blank
    #[command]
    Add {
        /// Title of the new note
        title: String,
        /// Description of the new note
        description: String,
    },

    /// Write the edit scratch back to the note under edit
    #[command]
    CommitEdit,

    /// Flip completion of the note at `position`
    #[command]
    ToggleComplete {
        /// List position
        position: usize,
    },

    /// Delete the note at `position`
    #[command]
    Remove {
        /// List position
        position: usize,
    },

    // ========== Intents ==========
    /// Start editing the note at `position`
    #[intent]
    BeginEdit {
        /// List position
        position: usize,
    },

    /// Replace the scratch title of the open edit
    #[intent]
    SetScratchTitle {
        /// New scratch title
        title: String,
    },

    /// Replace the scratch description of the open edit
    #[intent]
    SetScratchDescription {
        /// New scratch description
        description: String,
    },

    /// Abandon the open edit, if any
    #[intent]
    CancelEdit,

    /// Open or close the add-note form
    #[intent]
    ToggleForm,

    /// Replace the form's title text
    #[intent]
    SetDraftTitle {
        /// New draft title
        title: String,
    },

    /// Replace the form's description text
    #[intent]
    SetDraftDescription {
        /// New draft description
        description: String,
    },

    /// Submit the form's current contents as a new note
    #[intent]
    SubmitForm,

    /// Switch between all notes and completed notes only
    #[intent]
    ToggleFilter,

    /// Switch between light and dark
    #[intent]
    ToggleDisplayMode,
}
