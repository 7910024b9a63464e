pub mod layout_snapshot;
pub mod measure;
pub mod overflow_config;
pub mod partition;

pub use layout_snapshot::LayoutSnapshot;
pub use measure::BoxMetrics;
pub use overflow_config::{ConfigError, OverflowConfig, OverflowConfigPatch};
pub use partition::OverflowPartition;
