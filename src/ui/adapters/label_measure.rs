use unicode_width::UnicodeWidthStr;

use crate::app::ports::Measurable;

/// Measures a text label by its terminal display width, in cells.
///
/// A label with no display width (`""`, or only zero-width characters)
/// measures as `0.0` so the detector treats it as unmeasured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMeasure<'a> {
    label: &'a str,
}

impl<'a> LabelMeasure<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

impl Measurable for LabelMeasure<'_> {
    fn content_width(&self) -> f64 {
        self.label.width() as f64
    }
}
