use serde::{Deserialize, Serialize};

use super::measure::BoxMetrics;
use super::overflow_config::OverflowConfigPatch;

/// A captured container and its item strip, as written to disk by a host
/// (for example a browser devtools dump) and replayed through the detector.
///
/// `null` item slots are elements that were not mounted at capture time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSnapshot {
    pub container: Option<BoxMetrics>,
    pub items: Vec<Option<BoxMetrics>>,
    pub config: OverflowConfigPatch,
}
