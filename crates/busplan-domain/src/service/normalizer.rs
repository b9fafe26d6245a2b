//! Station name normalization

use std::collections::HashMap;

/// Grouping key for a station or person name.
///
/// Trims, collapses inner whitespace and lower-cases, so that
/// "Ngã 4 Thủ Đức" and "NGÃ 4  THỦ ĐỨC " share a key.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Maps normalized keys to the first spelling seen for them.
///
/// Each key gets a slot number in first-seen order, so callers can keep
/// parallel per-label data in a plain `Vec`.
#[derive(Debug, Default)]
pub struct LabelRegistry {
    slots: HashMap<String, usize>,
    labels: Vec<String>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot of `name`'s key, registering the spelling if the key is new
    pub fn slot_for(&mut self, name: &str) -> usize {
        let labels = &mut self.labels;
        *self.slots.entry(normalize(name)).or_insert_with(|| {
            labels.push(name.trim().to_string());
            labels.len() - 1
        })
    }

    /// Display label for `name`, registering it if the key is new
    pub fn label_for(&mut self, name: &str) -> &str {
        let slot = self.slot_for(name);
        &self.labels[slot]
    }

    /// Labels in first-seen order
    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
