pub mod label_measure;

pub use label_measure::LabelMeasure;
