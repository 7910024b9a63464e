pub mod overflow_strip;

pub use overflow_strip::OverflowStrip;
