pub mod config_source;
pub mod layout_source;

pub use config_source::TomlConfigSource;
pub use layout_source::FileLayoutSource;
