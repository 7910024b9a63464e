use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::overflow::detect;
use crate::domain::{OverflowConfig, OverflowPartition};
use crate::ui::adapters::LabelMeasure;
use crate::ui::theme::Theme;

/// A single-row strip of labels that collapses the ones that do not fit
/// into a trailing `+N` indicator.
pub struct OverflowStrip;

impl OverflowStrip {
    /// Runs detection with at least the indicator's own width reserved for
    /// the overflow control.
    pub fn layout(labels: &[&str], width: u16, config: &OverflowConfig) -> OverflowPartition {
        let items: Vec<Option<LabelMeasure<'_>>> = labels
            .iter()
            .map(|label| Some(LabelMeasure::new(label)))
            .collect();
        let config = OverflowConfig {
            overflow_button_width: config
                .overflow_button_width
                .max(Self::indicator_width(labels.len()) as f64),
            ..*config
        };
        detect(Some(&f64::from(width)), &items, &config)
    }

    /// Cells taken by the widest `+N` a strip of `label_count` labels can show.
    pub fn indicator_width(label_count: usize) -> usize {
        label_count.to_string().len() + 1
    }

    /// Builds the row for `partition`. The indicator is never clipped: when
    /// forced-visible labels leave no room for it, the separator in front of
    /// it shrinks and then the last label is cut short.
    pub fn line(
        labels: &[&str],
        partition: &OverflowPartition,
        gap: f64,
        width: u16,
    ) -> Line<'static> {
        let gap = gap.max(0.0).round() as usize;
        let width = usize::from(width);

        if !partition.needs_overflow {
            let (spans, _) = Self::label_spans(labels, &partition.visible_indices, gap, width);
            return Line::from(spans);
        }

        let indicator = Self::indicator(partition.hidden_count());
        let room = width.saturating_sub(indicator.width());
        let natural: usize = partition
            .visible_indices
            .iter()
            .map(|&index| labels[index].width())
            .sum::<usize>()
            + gap * partition.visible_count().saturating_sub(1);
        let budget = if natural <= room {
            room
        } else {
            room.saturating_sub(gap.min(1))
        };

        let (mut spans, used) =
            Self::label_spans(labels, &partition.visible_indices, gap, budget);
        let separator = if used == 0 {
            0
        } else {
            gap.min(room.saturating_sub(used))
        };
        if separator > 0 {
            spans.push(Span::raw(" ".repeat(separator)));
        }
        spans.push(indicator);

        Line::from(spans)
    }

    fn label_spans(
        labels: &[&str],
        visible: &[usize],
        gap: usize,
        budget: usize,
    ) -> (Vec<Span<'static>>, usize) {
        let mut spans = Vec::new();
        let mut used = 0;

        for (position, &index) in visible.iter().enumerate() {
            let separator = if position == 0 { 0 } else { gap };
            let remaining = budget.saturating_sub(used + separator);
            let label = truncate_to_width(labels[index], remaining);
            if label.width() == 0 && labels[index].width() > 0 {
                break;
            }
            if separator > 0 {
                spans.push(Span::raw(" ".repeat(separator)));
            }
            used += separator + label.width();
            spans.push(Span::styled(label, Style::default().fg(Theme::TEXT_PRIMARY)));
        }

        (spans, used)
    }

    pub fn indicator(hidden: usize) -> Span<'static> {
        Span::styled(
            format!("+{}", hidden),
            Style::default()
                .fg(Theme::TEXT_ACCENT)
                .bg(Theme::INDICATOR_BG)
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        labels: &[&str],
        config: &OverflowConfig,
    ) -> OverflowPartition {
        let partition = Self::layout(labels, area.width, config);
        let line = Self::line(labels, &partition, config.gap, area.width);
        frame.render_widget(Paragraph::new(line), area);
        partition
    }

    /// Renders into an off-screen one-row buffer and returns its text with
    /// trailing blanks removed.
    pub fn render_to_string(
        labels: &[&str],
        width: u16,
        config: &OverflowConfig,
    ) -> (String, OverflowPartition) {
        let area = Rect::new(0, 0, width, 1);
        let mut buffer = Buffer::empty(area);
        let partition = Self::layout(labels, width, config);
        Paragraph::new(Self::line(labels, &partition, config.gap, width))
            .render(area, &mut buffer);

        let text: String = (0..width)
            .filter_map(|x| buffer.cell((x, 0)))
            .map(|cell| cell.symbol())
            .collect();
        (text.trim_end().to_string(), partition)
    }
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_width {
            break;
        }
        used += width;
        out.push(ch);
    }
    out
}
