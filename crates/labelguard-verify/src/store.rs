use labelguard_types::LabelMapping;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// Concurrency-safe image -> label mapping storage for one verification run.
///
/// Each image is written exactly once, by its own fetch task; reads happen
/// only after the fetch barrier. An absent image reads as an empty mapping —
/// by the time evaluation runs, absence can only mean the orchestrator chose
/// to proceed past a reported fetch failure.
#[derive(Debug, Default)]
pub struct LabelStore {
    labels: RwLock<BTreeMap<String, LabelMapping>>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, image: &str, labels: LabelMapping) {
        self.labels
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(image.to_string(), labels);
    }

    pub fn labels_for(&self, image: &str) -> LabelMapping {
        self.labels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(image)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.labels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
