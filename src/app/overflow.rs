//! Greedy overflow detection for a horizontal strip of items.
//!
//! The detector runs in two passes. The first pass assumes nothing overflows
//! and so reserves no room for the overflow control. If anything ends up
//! hidden, a second pass re-fits the strip with the control's width (plus one
//! gap) reserved, and a final step promotes hidden items until the
//! `min_visible_items` floor is met.

use crate::app::ports::{Measurable, is_unmeasured};
use crate::domain::{OverflowConfig, OverflowPartition};

const TRACE_TARGET: &str = "wsx_overflow::detect";

/// What to do with a slot that has no usable width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnmeasuredPolicy {
    /// Optimistic pass: assume it fits.
    Show,
    /// Constrained pass: show only while fewer than `floor` items are visible.
    ShowUntilFloor(usize),
}

#[derive(Debug, Default)]
struct FitPass {
    visible: Vec<usize>,
    hidden: Vec<usize>,
}

fn fit_items<I: Measurable>(
    items: &[Option<I>],
    available_width: f64,
    gap: f64,
    policy: UnmeasuredPolicy,
) -> FitPass {
    let mut pass = FitPass {
        visible: Vec::with_capacity(items.len()),
        hidden: Vec::new(),
    };
    let mut total_width = 0.0;
    let mut placed_any = false;

    for (index, slot) in items.iter().enumerate() {
        if is_unmeasured(slot.as_ref()) {
            let show = match policy {
                UnmeasuredPolicy::Show => true,
                UnmeasuredPolicy::ShowUntilFloor(floor) => pass.visible.len() < floor,
            };
            if show {
                pass.visible.push(index);
            } else {
                pass.hidden.push(index);
            }
            continue;
        }

        let width = slot.as_ref().map_or(0.0, |item| item.content_width());
        let separator = if placed_any { gap } else { 0.0 };
        let needed = width + separator;

        // Keep walking after a miss: a later, narrower item may still fit.
        if total_width + needed <= available_width {
            total_width += needed;
            placed_any = true;
            pass.visible.push(index);
        } else {
            pass.hidden.push(index);
        }
    }

    pass
}

/// Partitions `items` into inline and overflowed indices for `container`.
///
/// An absent container or an empty strip yields an empty partition. Slots that
/// are `None` or report zero width are never an error: the first pass treats
/// them as fitting, the second only while the visibility floor is unmet.
pub fn detect<C, I>(
    container: Option<&C>,
    items: &[Option<I>],
    config: &OverflowConfig,
) -> OverflowPartition
where
    C: Measurable + ?Sized,
    I: Measurable,
{
    let Some(container) = container else {
        return OverflowPartition::empty();
    };
    if items.is_empty() {
        return OverflowPartition::empty();
    }

    let available_width =
        container.content_width() - config.reserved_width - config.padding * 2.0;

    let optimistic = fit_items(items, available_width, config.gap, UnmeasuredPolicy::Show);
    if optimistic.hidden.is_empty() {
        tracing::debug!(
            target: TRACE_TARGET,
            items = items.len(),
            available_width,
            "all items fit"
        );
        return OverflowPartition {
            visible_indices: optimistic.visible,
            hidden_indices: Vec::new(),
            needs_overflow: false,
        };
    }

    let constrained_width = available_width - config.overflow_button_width - config.gap;
    let FitPass {
        mut visible,
        mut hidden,
    } = fit_items(
        items,
        constrained_width,
        config.gap,
        UnmeasuredPolicy::ShowUntilFloor(config.min_visible_items),
    );

    // Hidden indices are pushed in encounter order, so the front holds the
    // smallest indices.
    let shortfall = config
        .min_visible_items
        .saturating_sub(visible.len())
        .min(hidden.len());
    if shortfall > 0 {
        tracing::debug!(
            target: TRACE_TARGET,
            shortfall,
            floor = config.min_visible_items,
            "promoting hidden items to reach the visibility floor"
        );
        visible.extend(hidden.drain(..shortfall));
        visible.sort_unstable();
    }

    tracing::debug!(
        target: TRACE_TARGET,
        items = items.len(),
        visible = visible.len(),
        hidden = hidden.len(),
        available_width,
        constrained_width,
        "overflow detected"
    );

    let needs_overflow = !hidden.is_empty();
    OverflowPartition {
        visible_indices: visible,
        hidden_indices: hidden,
        needs_overflow,
    }
}

/// Sum of item widths plus one `gap` between each pair of neighbours.
/// Unmeasured slots count as zero width but still take part in the gap count.
pub fn calculate_total_width<I: Measurable>(items: &[Option<I>], gap: f64) -> f64 {
    let widths: f64 = items
        .iter()
        .flatten()
        .map(Measurable::content_width)
        .sum();
    let gaps = items.len().saturating_sub(1) as f64;
    widths + gap * gaps
}

/// Content width plus horizontal margins; zero for an absent element.
pub fn element_total_width<M: Measurable + ?Sized>(element: Option<&M>) -> f64 {
    element.map_or(0.0, |element| {
        element.content_width() + element.margin_left() + element.margin_right()
    })
}

/// A configured detector for one strip. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverflowDetector {
    config: OverflowConfig,
}

impl OverflowDetector {
    pub fn new(config: OverflowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OverflowConfig {
        &self.config
    }

    pub fn detect<C, I>(&self, container: Option<&C>, items: &[Option<I>]) -> OverflowPartition
    where
        C: Measurable + ?Sized,
        I: Measurable,
    {
        detect(container, items, &self.config)
    }
}
