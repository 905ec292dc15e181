//! The to-do list and its edit session.
//!
//! Items are addressed by position only. Every position-based operation checks
//! the position against the current length and reports a [`TodoError`] instead
//! of quietly doing nothing.

use crate::error::TodoError;
use crate::types::{EditSession, TodoItem, ViewFilter, VisibleItem};
use chrono::{DateTime, Utc};

/// Ordered notes plus at most one open edit
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    edit: EditSession,
}

impl TodoStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notes in insertion order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Number of notes
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Note at `position`
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&TodoItem> {
        self.items.get(position)
    }

    /// The open edit session
    #[must_use]
    pub const fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    /// Number of completed notes
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_completed()).count()
    }

    /// Appends a note if both fields are non-blank after trimming
    ///
    /// The text is stored as typed. A successful add also closes any open edit
    /// session. Returns whether the note was appended.
    pub fn add(&mut self, title: String, description: String) -> bool {
        if title.trim().is_empty() || description.trim().is_empty() {
            return false;
        }

        self.items.push(TodoItem::new(title, description));
        self.edit = EditSession::None;
        true
    }

    /// Opens an edit session seeded from the note at `position`
    ///
    /// Replaces any session already open.
    ///
    /// # Errors
    ///
    /// [`TodoError::PositionOutOfRange`] if no note exists at `position`.
    pub fn begin_edit(&mut self, position: usize) -> Result<(), TodoError> {
        let item = self.checked(position)?;
        self.edit = EditSession::Editing {
            position,
            scratch_title: item.title.clone(),
            scratch_description: item.description.clone(),
        };
        Ok(())
    }

    /// Replaces the scratch title of the open session
    ///
    /// # Errors
    ///
    /// [`TodoError::NoActiveEdit`] if no session is open.
    pub fn set_scratch_title(&mut self, title: String) -> Result<(), TodoError> {
        match &mut self.edit {
            EditSession::Editing { scratch_title, .. } => {
                *scratch_title = title;
                Ok(())
            },
            EditSession::None => Err(TodoError::NoActiveEdit),
        }
    }

    /// Replaces the scratch description of the open session
    ///
    /// # Errors
    ///
    /// [`TodoError::NoActiveEdit`] if no session is open.
    pub fn set_scratch_description(&mut self, description: String) -> Result<(), TodoError> {
        match &mut self.edit {
            EditSession::Editing {
                scratch_description,
                ..
            } => {
                *scratch_description = description;
                Ok(())
            },
            EditSession::None => Err(TodoError::NoActiveEdit),
        }
    }

    /// Writes the scratch values into the note under edit and closes the session
    ///
    /// Scratch values are written as they are, blank or not. Completion is left
    /// alone. Returns the position that was updated.
    ///
    /// # Errors
    ///
    /// [`TodoError::NoActiveEdit`] if no session is open, or
    /// [`TodoError::PositionOutOfRange`] if the session's note no longer exists.
    pub fn commit_edit(&mut self) -> Result<usize, TodoError> {
        let EditSession::Editing { position, .. } = self.edit else {
            return Err(TodoError::NoActiveEdit);
        };
        self.checked(position)?;

        let EditSession::Editing {
            scratch_title,
            scratch_description,
            ..
        } = std::mem::take(&mut self.edit)
        else {
            return Err(TodoError::NoActiveEdit);
        };

        let item = &mut self.items[position];
        item.title = scratch_title;
        item.description = scratch_description;
        Ok(position)
    }

    /// Closes the open session without touching the list
    ///
    /// Safe to call with no session open. Returns whether a session was closed.
    pub fn cancel_edit(&mut self) -> bool {
        !matches!(std::mem::take(&mut self.edit), EditSession::None)
    }

    /// Flips completion of the note at `position`
    ///
    /// Completing stamps the note with `now`; reopening clears the stamp.
    /// Returns the new completion state.
    ///
    /// # Errors
    ///
    /// [`TodoError::PositionOutOfRange`] if no note exists at `position`.
    pub fn toggle_complete(&mut self, position: usize, now: DateTime<Utc>) -> Result<bool, TodoError> {
        self.checked(position)?;
        let item = &mut self.items[position];
        if item.is_completed() {
            item.reopen();
        } else {
            item.complete(now);
        }
        Ok(item.is_completed())
    }

    /// Removes the note at `position`; later notes move down by one
    ///
    /// An edit session on the removed note is closed. A session on a later note
    /// follows it to its new position.
    ///
    /// # Errors
    ///
    /// [`TodoError::PositionOutOfRange`] if no note exists at `position`.
    pub fn remove(&mut self, position: usize) -> Result<TodoItem, TodoError> {
        self.checked(position)?;
        let removed = self.items.remove(position);

        match self.edit.position() {
            Some(edited) if edited == position => self.edit = EditSession::None,
            Some(edited) if edited > position => {
                if let EditSession::Editing { position: edited, .. } = &mut self.edit {
                    *edited -= 1;
                }
            },
            Some(_) | None => {},
        }

        Ok(removed)
    }

    /// Notes shown under `filter`, each with its list position
    ///
    /// `CompletedOnly` keeps completed notes in their original order; `All`
    /// returns the whole list.
    #[must_use]
    pub fn visible_items(&self, filter: ViewFilter) -> Vec<VisibleItem<'_>> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| match filter {
                ViewFilter::All => true,
                ViewFilter::CompletedOnly => item.is_completed(),
            })
            .map(|(position, item)| VisibleItem { position, item })
            .collect()
    }

    fn checked(&self, position: usize) -> Result<&TodoItem, TodoError> {
        self.items.get(position).ok_or(TodoError::PositionOutOfRange {
            position,
            len: self.items.len(),
        })
    }
}
