use crate::domain::BoxMetrics;

/// Read-only measurement capability of a laid-out element.
///
/// Bindings to a concrete UI toolkit implement this; the detector depends on
/// nothing else.
#[cfg_attr(test, mockall::automock)]
pub trait Measurable {
    /// Content-box width. `0.0` means "not measured yet".
    fn content_width(&self) -> f64;

    fn margin_left(&self) -> f64 {
        0.0
    }

    fn margin_right(&self) -> f64 {
        0.0
    }
}

impl Measurable for BoxMetrics {
    fn content_width(&self) -> f64 {
        self.content_width
    }

    fn margin_left(&self) -> f64 {
        self.margin_left
    }

    fn margin_right(&self) -> f64 {
        self.margin_right
    }
}

impl Measurable for f64 {
    fn content_width(&self) -> f64 {
        *self
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn content_width(&self) -> f64 {
        (**self).content_width()
    }

    fn margin_left(&self) -> f64 {
        (**self).margin_left()
    }

    fn margin_right(&self) -> f64 {
        (**self).margin_right()
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    fn content_width(&self) -> f64 {
        (**self).content_width()
    }

    fn margin_left(&self) -> f64 {
        (**self).margin_left()
    }

    fn margin_right(&self) -> f64 {
        (**self).margin_right()
    }
}

/// Absent slots and zero-width slots are both unmeasured.
pub fn is_unmeasured<M: Measurable>(slot: Option<&M>) -> bool {
    slot.is_none_or(|item| item.content_width() == 0.0)
}
