use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_GAP: f64 = 16.0;
pub const DEFAULT_MIN_VISIBLE_ITEMS: usize = 1;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Tuning knobs for overflow detection. All widths are in the same unit as
/// the measured item widths (CSS pixels for DOM bindings, cells for terminals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverflowConfig {
    /// Spacing between consecutive visible items.
    pub gap: f64,
    /// Space taken by fixed sibling UI in the same container.
    pub reserved_width: f64,
    /// Width of the "more" control, reserved only once truncation is needed.
    pub overflow_button_width: f64,
    /// Symmetric container inset, subtracted on both sides.
    pub padding: f64,
    /// Items that stay visible no matter how little space there is.
    pub min_visible_items: usize,
}

impl Default for OverflowConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            reserved_width: 0.0,
            overflow_button_width: 0.0,
            padding: 0.0,
            min_visible_items: DEFAULT_MIN_VISIBLE_ITEMS,
        }
    }
}

impl OverflowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("gap", self.gap),
            ("reserved_width", self.reserved_width),
            ("overflow_button_width", self.overflow_button_width),
            ("padding", self.padding),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Returns a copy with every field set in `patch` overriding this one.
    pub fn merged(mut self, patch: &OverflowConfigPatch) -> Self {
        if let Some(gap) = patch.gap {
            self.gap = gap;
        }
        if let Some(reserved_width) = patch.reserved_width {
            self.reserved_width = reserved_width;
        }
        if let Some(overflow_button_width) = patch.overflow_button_width {
            self.overflow_button_width = overflow_button_width;
        }
        if let Some(padding) = patch.padding {
            self.padding = padding;
        }
        if let Some(min_visible_items) = patch.min_visible_items {
            self.min_visible_items = min_visible_items;
        }
        self
    }
}

/// Partial [`OverflowConfig`]; `None` fields leave the base value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverflowConfigPatch {
    pub gap: Option<f64>,
    pub reserved_width: Option<f64>,
    pub overflow_button_width: Option<f64>,
    pub padding: Option<f64>,
    pub min_visible_items: Option<usize>,
}

impl OverflowConfigPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
