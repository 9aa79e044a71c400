use std::sync::Arc;

use crate::{
    models::Emergency,
    remote::{FetchState, Snapshot},
};

/// Copies the records and orders them most urgent first.
///
/// `sort_by` is stable, so equal urgency keeps the backend order.
pub fn sort_by_urgency(records: &[Emergency]) -> Vec<Emergency> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.urgency_level.cmp(&a.urgency_level));
    sorted
}

/// Display order plus the one record focused on the map.
#[derive(Default)]
pub struct Board {
    source: Option<Snapshot>,
    sorted: Vec<Emergency>,
    selected: Option<String>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts the state's snapshot. Sorting only reruns when the snapshot
    /// itself changed.
    pub fn sync(&mut self, state: &FetchState) {
        match state.snapshot() {
            Some(snapshot) => {
                if self
                    .source
                    .as_ref()
                    .is_some_and(|current| Arc::ptr_eq(current, snapshot))
                {
                    return;
                }

                self.sorted = sort_by_urgency(snapshot);
                self.source = Some(snapshot.clone());
            }
            None => {
                self.source = None;
                self.sorted.clear();
            }
        }

        if self.selected().is_none() {
            self.selected = None;
        }
    }

    pub fn sorted(&self) -> &[Emergency] {
        &self.sorted
    }

    /// Toggles `id`: the selected record is cleared, any other record replaces
    /// it. An id not on the board clears the selection.
    pub fn select(&mut self, id: &str) -> Option<&Emergency> {
        self.selected = match self.selected.as_deref() {
            Some(current) if current == id => None,
            _ if self.find(id).is_none() => None,
            _ => Some(id.to_string()),
        };

        self.selected()
    }

    pub fn selected(&self) -> Option<&Emergency> {
        self.selected.as_deref().and_then(|id| self.find(id))
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected().is_some_and(|emergency| emergency.id == id)
    }

    fn find(&self, id: &str) -> Option<&Emergency> {
        self.sorted.iter().find(|emergency| emergency.id == id)
    }
}
