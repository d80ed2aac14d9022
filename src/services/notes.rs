//! Notes operations on top of the session controller.
//!
//! Notes share the controller's authenticated client, so a 401 from any notes
//! call signs the user out exactly like a dashboard load would. Writes return
//! the freshly reloaded list.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use super::navigator::Navigator;
use super::session::SessionController;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Note;
use crate::state::notes::{NoteForm, NotesFilter};
use crate::state::token_store::TokenStore;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotesError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("failed to load notes: {0}")]
    Load(ApiError),
    #[error("failed to save note: {0}")]
    Save(ApiError),
    #[error("failed to delete note: {0}")]
    Delete(ApiError),
}

impl NotesError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(message) => (*message).to_owned(),
            Self::Load(err) => err.user_message("Failed to load notes."),
            Self::Save(err) => err.user_message("Failed to save note."),
            Self::Delete(err) => err.user_message("Failed to delete note."),
        }
    }
}

impl<T: Transport, S: TokenStore, N: Navigator> SessionController<T, S, N> {
    /// # Errors
    ///
    /// Returns [`NotesError::Load`] if the list cannot be fetched.
    pub async fn load_notes(&self, filter: &NotesFilter) -> Result<Vec<Note>, NotesError> {
        let result = self.api().list_notes(&filter.to_query()).await;
        self.guard(result).await.map_err(NotesError::Load)
    }

    /// Create or update (when `form.editing_id` is set), then reload.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Invalid`] before any request when the form is
    /// incomplete, otherwise the failing step's error.
    pub async fn save_note(&self, form: &NoteForm, filter: &NotesFilter) -> Result<Vec<Note>, NotesError> {
        let payload = form.to_payload().map_err(NotesError::Invalid)?;
        let result = match form.editing_id {
            Some(id) => self.api().update_note(id, &payload).await,
            None => self.api().create_note(&payload).await,
        };
        self.guard(result).await.map_err(NotesError::Save)?;
        log::debug!("notes: saved {:?}", form.editing_id);
        self.load_notes(filter).await
    }

    /// Delete note `id`, then reload.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Delete`] or [`NotesError::Load`].
    pub async fn delete_note(&self, id: i64, filter: &NotesFilter) -> Result<Vec<Note>, NotesError> {
        let result = self.api().delete_note(id).await;
        self.guard(result).await.map_err(NotesError::Delete)?;
        log::debug!("notes: deleted {id}");
        self.load_notes(filter).await
    }
}
