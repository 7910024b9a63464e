use serde::{Deserialize, Serialize};

/// Measured horizontal box of a laid-out element.
///
/// A `content_width` of `0.0` means the element has not been laid out yet (or
/// is intentionally empty); the detector treats such slots as unmeasured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxMetrics {
    pub content_width: f64,
    pub margin_left: f64,
    pub margin_right: f64,
}

impl BoxMetrics {
    pub fn new(content_width: f64) -> Self {
        Self {
            content_width,
            ..Self::default()
        }
    }

    pub fn with_margins(mut self, margin_left: f64, margin_right: f64) -> Self {
        self.margin_left = margin_left;
        self.margin_right = margin_right;
        self
    }
}
