use serde::{Deserialize, Serialize};

/// Which item indices are shown inline and which go behind the overflow control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowPartition {
    /// Always ascending.
    pub visible_indices: Vec<usize>,
    pub hidden_indices: Vec<usize>,
    pub needs_overflow: bool,
}

impl OverflowPartition {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all_visible(count: usize) -> Self {
        Self {
            visible_indices: (0..count).collect(),
            hidden_indices: Vec::new(),
            needs_overflow: false,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden_indices.len()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_indices.binary_search(&index).is_ok()
    }

    /// True when visible and hidden together are exactly `0..count`, with no
    /// index appearing twice.
    pub fn covers(&self, count: usize) -> bool {
        if self.visible_count() + self.hidden_count() != count {
            return false;
        }
        let mut seen = vec![false; count];
        for &index in self.visible_indices.iter().chain(&self.hidden_indices) {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}
