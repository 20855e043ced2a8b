//! The inventory reducer and its derived, read-only views.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Entity, IdGenerator, ItemId, Reducer, UuidV7Ids};

use crate::item::{InventoryItem, ItemDraft};

/// The only ways the collection changes.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    /// Prepend a new item under a freshly generated id.
    Add(ItemDraft),
    /// Remove the item with this id (no-op when absent).
    Delete(ItemId),
    /// Overwrite the fields of the item with this id, keeping id and position.
    Edit { id: ItemId, patch: ItemDraft },
    /// Install a whole new sequence as canonical state.
    ReplaceAll(Vec<InventoryItem>),
}

impl InventoryAction {
    pub fn kind(&self) -> &'static str {
        match self {
            InventoryAction::Add(_) => "add",
            InventoryAction::Delete(_) => "delete",
            InventoryAction::Edit { .. } => "edit",
            InventoryAction::ReplaceAll(_) => "replace_all",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascending",
            SortDirection::Desc => "Descending",
        }
    }
}

/// How a sort toggle affects the collection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// The sorted order is installed via `ReplaceAll` and becomes the
    /// persisted canonical order.
    #[default]
    Canonical,
    /// Sorting only reorders what `visible` returns.
    View,
}

impl core::str::FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(SortMode::Canonical),
            "view" => Ok(SortMode::View),
            other => Err(DomainError::validation(format!("unknown sort mode: {other}"))),
        }
    }
}

/// Pure transition: `apply(collection, action) -> collection'`.
///
/// Never fails. `ids` is consulted only for `Add`, and generated ids that
/// already occur in `items` are skipped.
pub fn reduce<G>(items: Vec<InventoryItem>, action: InventoryAction, ids: &mut G) -> Vec<InventoryItem>
where
    G: IdGenerator + ?Sized,
{
    match action {
        InventoryAction::Add(draft) => {
            let id = fresh_id(&items, ids);
            let mut next = Vec::with_capacity(items.len() + 1);
            next.push(InventoryItem::new(id, draft));
            next.extend(items);
            next
        }
        InventoryAction::Delete(id) => items.into_iter().filter(|item| !item.has_id(&id)).collect(),
        InventoryAction::Edit { id, patch } => {
            let mut items = items;
            if let Some(item) = items.iter_mut().find(|item| item.has_id(&id)) {
                item.patch(patch);
            }
            items
        }
        InventoryAction::ReplaceAll(items) => dedupe_by_id(items),
    }
}

fn fresh_id<G>(items: &[InventoryItem], ids: &mut G) -> ItemId
where
    G: IdGenerator + ?Sized,
{
    loop {
        let id = ids.next_id();
        if !items.iter().any(|item| item.has_id(&id)) {
            return id;
        }
        tracing::debug!(%id, "generated id already in use; drawing another");
    }
}

/// Keep the first occurrence of every id.
pub fn dedupe_by_id(items: Vec<InventoryItem>) -> Vec<InventoryItem> {
    let mut seen = HashSet::with_capacity(items.len());
    let before = items.len();
    let kept: Vec<_> = items
        .into_iter()
        .filter(|item| seen.insert(item.id().clone()))
        .collect();

    if kept.len() != before {
        tracing::warn!(dropped = before - kept.len(), "dropped items with duplicate ids");
    }
    kept
}

/// Items whose category equals `text`, ignoring case. Empty text matches all.
pub fn filter_by_category<'a>(items: &'a [InventoryItem], text: &str) -> Vec<&'a InventoryItem> {
    if text.is_empty() {
        return items.iter().collect();
    }
    let needle = text.to_lowercase();
    items
        .iter()
        .filter(|item| item.category().to_lowercase() == needle)
        .collect()
}

/// Stable sort by quantity; ties keep their relative order.
pub fn sorted_by_quantity(items: &[InventoryItem], direction: SortDirection) -> Vec<InventoryItem> {
    let mut sorted = items.to_vec();
    match direction {
        SortDirection::Asc => sorted.sort_by(|a, b| a.quantity().cmp(&b.quantity())),
        SortDirection::Desc => sorted.sort_by(|a, b| b.quantity().cmp(&a.quantity())),
    }
    sorted
}

/// Owned inventory state: the canonical collection plus the remembered
/// sort direction.
///
/// One instance is created per session and handed to the presentation
/// layer; there is no global collection.
#[derive(Debug, Clone)]
pub struct InventoryStore<G = UuidV7Ids> {
    items: Vec<InventoryItem>,
    ids: G,
    next_sort: SortDirection,
    sort_mode: SortMode,
    view_sort: Option<SortDirection>,
    revision: u64,
    last_added: Option<ItemId>,
}

impl InventoryStore<UuidV7Ids> {
    pub fn new() -> Self {
        Self::with_ids(UuidV7Ids)
    }
}

impl Default for InventoryStore<UuidV7Ids> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> InventoryStore<G> {
    pub fn with_ids(ids: G) -> Self {
        Self {
            items: Vec::new(),
            ids,
            next_sort: SortDirection::Asc,
            sort_mode: SortMode::Canonical,
            view_sort: None,
            revision: 0,
            last_added: None,
        }
    }

    /// Start from a previously loaded collection. Duplicate ids are dropped.
    pub fn with_items(mut self, items: Vec<InventoryItem>) -> Self {
        self.items = dedupe_by_id(items);
        self
    }

    pub fn with_sort_mode(mut self, mode: SortMode) -> Self {
        self.sort_mode = mode;
        self
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.has_id(id))
    }

    /// Id assigned by the most recent `Add`.
    pub fn last_added(&self) -> Option<&ItemId> {
        self.last_added.as_ref()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Direction the next `toggle_sort` will apply.
    pub fn next_sort_direction(&self) -> SortDirection {
        self.next_sort
    }

    /// `Add` with the generated id handed back to the caller.
    pub fn add(&mut self, draft: ItemDraft) -> ItemId {
        let id = fresh_id(&self.items, &mut self.ids);
        self.items.insert(0, InventoryItem::new(id.clone(), draft));
        self.last_added = Some(id.clone());
        self.record("add");
        id
    }

    pub fn delete(&mut self, id: ItemId) {
        self.apply(InventoryAction::Delete(id));
    }

    pub fn edit(&mut self, id: ItemId, patch: ItemDraft) {
        self.apply(InventoryAction::Edit { id, patch });
    }

    pub fn replace_all(&mut self, items: Vec<InventoryItem>) {
        self.apply(InventoryAction::ReplaceAll(items));
    }

    pub fn filter_by_category(&self, text: &str) -> Vec<&InventoryItem> {
        filter_by_category(&self.items, text)
    }

    pub fn sort_by_quantity(&self, direction: SortDirection) -> Vec<InventoryItem> {
        sorted_by_quantity(&self.items, direction)
    }

    /// Sort by the remembered direction, then flip it for next time.
    ///
    /// In [`SortMode::Canonical`] the sorted sequence is installed through
    /// `ReplaceAll` (and so counts as a transition). In [`SortMode::View`]
    /// only the order returned by [`visible`](Self::visible) changes.
    ///
    /// Returns the direction that was applied.
    pub fn toggle_sort(&mut self) -> SortDirection {
        let direction = self.next_sort;
        match self.sort_mode {
            SortMode::Canonical => {
                let sorted = self.sort_by_quantity(direction);
                self.apply(InventoryAction::ReplaceAll(sorted));
            }
            SortMode::View => {
                self.view_sort = Some(direction);
            }
        }
        self.next_sort = direction.flipped();
        direction
    }

    fn record(&mut self, kind: &'static str) {
        self.revision += 1;
        tracing::debug!(action = kind, revision = self.revision, items = self.items.len(), "applied inventory action");
    }

    /// What the table shows: the canonical order (or the view sort), filtered
    /// by category.
    pub fn visible(&self, category_filter: &str) -> Vec<&InventoryItem> {
        let mut rows = filter_by_category(&self.items, category_filter);
        if let Some(direction) = self.view_sort {
            match direction {
                SortDirection::Asc => rows.sort_by(|a, b| a.quantity().cmp(&b.quantity())),
                SortDirection::Desc => rows.sort_by(|a, b| b.quantity().cmp(&a.quantity())),
            }
        }
        rows
    }
}

impl<G: IdGenerator> Reducer for InventoryStore<G> {
    type Action = InventoryAction;

    fn apply(&mut self, action: Self::Action) {
        match action {
            InventoryAction::Add(draft) => {
                self.add(draft);
            }
            other => {
                let kind = other.kind();
                let items = std::mem::take(&mut self.items);
                self.items = reduce(items, other, &mut self.ids);
                self.record(kind);
            }
        }
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
