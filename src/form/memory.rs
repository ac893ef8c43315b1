//! Headless view-model backed by in-process state

use super::{FieldGroup, FormSnapshot, PricingView, ResultSlot};
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

#[derive(Debug, Default)]
struct ViewState {
    snapshot: FormSnapshot,
    visibility: HashMap<FieldGroup, bool>,
    results: BTreeMap<ResultSlot, String>,
    writes: usize,
}

/// View-model holding field values, group visibility and result text in memory
#[derive(Debug, Default)]
pub struct InMemoryView {
    state: RwLock<ViewState>,
}

impl InMemoryView {
    pub fn new(snapshot: FormSnapshot) -> Self {
        Self {
            state: RwLock::new(ViewState {
                snapshot,
                ..ViewState::default()
            }),
        }
    }

    /// Replace the form field values
    pub fn set_snapshot(&self, snapshot: FormSnapshot) {
        if let Ok(mut state) = self.state.write() {
            state.snapshot = snapshot;
        }
    }

    /// Visibility of a group, `None` until the first mode change
    pub fn is_visible(&self, group: FieldGroup) -> Option<bool> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.visibility.get(&group).copied())
    }

    /// Current text of a result slot
    pub fn result(&self, slot: ResultSlot) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.results.get(&slot).cloned())
    }

    /// All written result slots in display order
    pub fn results(&self) -> Vec<(ResultSlot, String)> {
        self.state
            .read()
            .map(|state| {
                state
                    .results
                    .iter()
                    .map(|(slot, text)| (*slot, text.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of result writes since creation
    pub fn write_count(&self) -> usize {
        self.state.read().map(|state| state.writes).unwrap_or(0)
    }
}

impl PricingView for InMemoryView {
    fn snapshot(&self) -> FormSnapshot {
        self.state
            .read()
            .map(|state| state.snapshot.clone())
            .unwrap_or_default()
    }

    fn set_visibility(&self, group: FieldGroup, visible: bool) {
        if let Ok(mut state) = self.state.write() {
            state.visibility.insert(group, visible);
        }
    }

    fn write_result(&self, slot: ResultSlot, text: &str) {
        if let Ok(mut state) = self.state.write() {
            state.results.insert(slot, text.to_string());
            state.writes += 1;
        }
    }
}
