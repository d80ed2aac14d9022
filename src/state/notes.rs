//! Notes panel state: list, filters, and the create/edit form.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use crate::net::api::NoteQuery;
use crate::net::types::{DashboardSnapshot, Note, NotePayload};

/// Cloud filter value meaning "no filter".
pub const ALL_CLOUDS: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesFilter {
    pub search: String,
    /// Exact cloud name or [`ALL_CLOUDS`].
    pub cloud: String,
}

impl Default for NotesFilter {
    fn default() -> Self {
        Self { search: String::new(), cloud: ALL_CLOUDS.to_owned() }
    }
}

impl NotesFilter {
    pub fn to_query(&self) -> NoteQuery {
        NoteQuery {
            cloud_name: (self.cloud != ALL_CLOUDS && !self.cloud.is_empty()).then(|| self.cloud.clone()),
            search: (!self.search.trim().is_empty()).then(|| self.search.trim().to_owned()),
        }
    }
}

/// Editable form fields; `editing_id` is set when updating an existing note.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub editing_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub ip_address: String,
    pub cloud_name: String,
    pub pool_name: String,
}

impl NoteForm {
    pub fn from_note(note: &Note) -> Self {
        Self {
            editing_id: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            ip_address: note.ip_address.clone().unwrap_or_default(),
            cloud_name: note.cloud_name.clone().unwrap_or_default(),
            pool_name: note.pool_name.clone().unwrap_or_default(),
        }
    }

    /// Changing the cloud invalidates the selected pool.
    pub fn set_cloud(&mut self, cloud_name: String) {
        self.cloud_name = cloud_name;
        self.pool_name.clear();
    }

    /// Validate and convert to a request payload; blank optionals become `null`.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when title or content is blank.
    pub fn to_payload(&self) -> Result<NotePayload, &'static str> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err("Title and content are required.");
        }
        Ok(NotePayload {
            title: self.title.trim().to_owned(),
            content: self.content.trim().to_owned(),
            ip_address: optional(&self.ip_address),
            cloud_name: optional(&self.cloud_name),
            pool_name: optional(&self.pool_name),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotesState {
    pub items: Vec<Note>,
    pub filter: NotesFilter,
    pub form: Option<NoteForm>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

/// Pool names offered for `cloud_name` in the note form.
impl NotesState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
        self.error = None;
    }

    /// Apply a reloaded list, or surface the failure and keep the old one.
    pub fn finish_load(&mut self, result: Result<Vec<Note>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }

    /// A successful save closes the form; a failed one leaves it open for correction.
    pub fn finish_save(&mut self, result: Result<Vec<Note>, String>) {
        self.saving = false;
        if result.is_ok() {
            self.form = None;
        }
        self.finish_load(result);
    }

    pub fn open_new(&mut self) {
        self.form = Some(NoteForm::default());
        self.error = None;
    }

    pub fn edit(&mut self, note: &Note) {
        self.form = Some(NoteForm::from_note(note));
        self.error = None;
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }
}

pub fn pools_for_cloud(snapshot: Option<&DashboardSnapshot>, cloud_name: &str) -> Vec<String> {
    if cloud_name.is_empty() {
        return Vec::new();
    }
    snapshot
        .and_then(|s| s.cloud(cloud_name))
        .map(|c| c.pools.iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default()
}
