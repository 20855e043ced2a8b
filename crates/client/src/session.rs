//! The session a presentation layer drives.

use stockroom_core::{IdGenerator, ItemId, Reducer};
use stockroom_inventory::{
    DisplayOptions, InventoryAction, InventoryItem, InventoryStore, ItemForm, ItemRow, SortDirection,
};
use stockroom_storage::{InventoryPersistence, KeyValueStorage, StorageError};

use crate::error::SessionError;

/// One user's inventory session: store, persistence, form and view state.
///
/// Every method that changes the collection saves it before returning.
/// A save failure is reported as [`SessionError::Storage`] after the change
/// has already been applied in memory.
#[derive(Debug)]
pub struct InventorySession<S, G> {
    store: InventoryStore<G>,
    persistence: InventoryPersistence<S>,
    form: ItemForm,
    category_filter: String,
    display: DisplayOptions,
}

impl<S, G> InventorySession<S, G>
where
    S: KeyValueStorage,
    G: IdGenerator,
{
    /// Seed `store` with whatever `persistence` holds.
    pub fn open(store: InventoryStore<G>, persistence: InventoryPersistence<S>) -> Self {
        let store = store.with_items(persistence.load());
        Self {
            store,
            persistence,
            form: ItemForm::new(),
            category_filter: String::new(),
            display: DisplayOptions::default(),
        }
    }

    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    pub fn store(&self) -> &InventoryStore<G> {
        &self.store
    }

    pub fn items(&self) -> &[InventoryItem] {
        self.store.items()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn persistence(&self) -> &InventoryPersistence<S> {
        &self.persistence
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    /// Field values are edited in place by the UI.
    pub fn form_mut(&mut self) -> &mut ItemForm {
        &mut self.form
    }

    pub fn category_filter(&self) -> &str {
        &self.category_filter
    }

    /// Apply any action and mirror the result to storage.
    pub fn dispatch(&mut self, action: InventoryAction) -> Result<(), StorageError> {
        self.store.apply(action);
        self.persist()
    }

    /// Validate the form and add its values as a new item.
    ///
    /// On success the form is cleared and the generated id returned.
    pub fn add_item(&mut self) -> Result<ItemId, SessionError> {
        if self.form.is_editing() {
            return Err(SessionError::EditInProgress);
        }
        let draft = self.form.validate().inspect_err(|err| {
            tracing::info!(error = %err, "add rejected");
        })?;

        let id = self.store.add(draft);
        self.form.reset();
        self.persist()?;
        Ok(id)
    }

    /// Pre-fill the form from the item with `id`.
    pub fn begin_edit(&mut self, id: &ItemId) -> Result<(), SessionError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| SessionError::UnknownItem(id.clone()))?;
        self.form.begin_edit(item);
        Ok(())
    }

    /// Apply the form values to the item being edited.
    ///
    /// Invalid values keep the form in edit mode and leave the item as is.
    /// If the item was deleted meanwhile the edit is a no-op.
    pub fn commit_edit(&mut self) -> Result<(), SessionError> {
        let id = self.form.editing().cloned().ok_or(SessionError::NotEditing)?;
        let patch = self.form.validate()?;

        self.store.edit(id, patch);
        self.form.reset();
        self.persist()?;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    /// Remove the item with `id` immediately; unknown ids are a no-op.
    pub fn delete(&mut self, id: &ItemId) -> Result<(), SessionError> {
        self.store.delete(id.clone());
        if self.form.editing() == Some(id) {
            self.form.reset();
        }
        self.persist()?;
        Ok(())
    }

    /// Live category filter; an empty string shows everything.
    pub fn set_category_filter(&mut self, text: impl Into<String>) {
        self.category_filter = text.into();
    }

    /// Sort by quantity in the remembered direction and flip it.
    pub fn toggle_sort(&mut self) -> Result<SortDirection, SessionError> {
        let revision = self.store.revision();
        let applied = self.store.toggle_sort();
        if self.store.revision() != revision {
            self.persist()?;
        }
        Ok(applied)
    }

    /// Label for the sort button: the direction the next toggle applies.
    pub fn sort_label(&self) -> &'static str {
        self.store.next_sort_direction().label()
    }

    /// Table rows after filtering (and view sorting, if enabled).
    pub fn rows(&self) -> Vec<ItemRow> {
        self.store
            .visible(&self.category_filter)
            .into_iter()
            .map(|item| ItemRow::from_item(item, &self.display))
            .collect()
    }

    pub fn find_row(&self, id: &ItemId) -> Option<ItemRow> {
        self.rows().into_iter().find(|row| &row.id == id)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        self.persistence.save(self.store.items())
    }

    /// Give back the store and persistence, e.g. to reopen elsewhere.
    pub fn into_parts(self) -> (InventoryStore<G>, InventoryPersistence<S>) {
        (self.store, self.persistence)
    }
}
