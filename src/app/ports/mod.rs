pub mod config_source;
pub mod layout_source;
pub mod measurable;

pub use config_source::{ConfigSource, ConfigSourceError};
pub use layout_source::{LayoutSource, LayoutSourceError};
pub use measurable::{Measurable, is_unmeasured};
