//! Horizontal bar chart widget.
//!
//! Renders an ordered sequence of [`ChartRow`]s as label + bar + raw value
//! lines inside a titled container. The scale maximum is either supplied by
//! the caller or computed from the data.
//!
//! A supplied maximum is used verbatim even when it is below the true
//! maximum of the data, so width fractions above 1.0 are possible. The
//! on-screen bar saturates at the available cell width, but
//! [`width_fraction`] itself is unclamped.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::ChartRow;
use crate::ui::theme::{COLOR_BAR, COLOR_BORDER, COLOR_DIM, COLOR_TEXT};

/// Widest label column the chart will allocate
const MAX_LABEL_COL: usize = 14;

/// Cell used for the filled portion of a bar
const BAR_CELL: &str = "█";

// ============================================================================
// Scale Resolution
// ============================================================================

/// Resolve the chart's scale maximum.
///
/// An explicit maximum wins verbatim; otherwise the maximum magnitude across
/// all rows is used. Empty input without an explicit maximum resolves to 0.
pub fn resolve_max(rows: &[ChartRow], explicit: Option<f64>) -> f64 {
    match explicit {
        Some(max) => max,
        None => rows.iter().map(|r| r.magnitude).fold(0.0, f64::max),
    }
}

/// Fraction of the available width a bar occupies: `magnitude / max`.
///
/// Unclamped: a magnitude above the maximum yields a fraction above 1.0. A
/// zero or non-finite maximum yields 0.0 rather than NaN.
pub fn width_fraction(magnitude: f64, max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    magnitude / max
}

/// Number of cells a bar occupies for a given fraction and available width.
///
/// This is the physical bar; it saturates at `available` because the
/// terminal cannot draw past the row.
pub fn bar_cells(fraction: f64, available: u16) -> u16 {
    if fraction <= 0.0 {
        return 0;
    }
    let cells = (fraction * f64::from(available)).round() as u32;
    cells.min(u32::from(available)) as u16
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a bar chart into the given area, inside a titled bordered block.
pub fn render(frame: &mut Frame, area: Rect, title: &str, rows: &[ChartRow], max: Option<f64>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let lines = chart_lines(rows, max, inner.width);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Build the chart body lines for a given inner width.
///
/// Empty input yields no lines; the caller still gets its titled container.
pub fn chart_lines(rows: &[ChartRow], max: Option<f64>, width: u16) -> Vec<Line<'static>> {
    if rows.is_empty() {
        return Vec::new();
    }

    let resolved_max = resolve_max(rows, max);
    let label_col = label_column_width(rows);
    let value_col = rows
        .iter()
        .map(|r| format_magnitude(r.magnitude).len())
        .max()
        .unwrap_or(0);

    // label + space + bar + space + value
    let bar_space = usize::from(width).saturating_sub(label_col + value_col + 2) as u16;

    rows.iter()
        .map(|row| {
            let fraction = width_fraction(row.magnitude, resolved_max);
            let filled = bar_cells(fraction, bar_space);
            let label = pad_label(&row.label, label_col);
            let bar = BAR_CELL.repeat(usize::from(filled));
            let value = format_magnitude(row.magnitude);

            Line::from(vec![
                Span::styled(label, Style::default().fg(COLOR_DIM)),
                Span::raw(" "),
                Span::styled(bar, Style::default().fg(COLOR_BAR)),
                Span::raw(" "),
                Span::styled(value, Style::default().fg(COLOR_TEXT)),
            ])
        })
        .collect()
}

// ============================================================================
// Helpers
// ============================================================================

/// Label column width: widest label, capped at [`MAX_LABEL_COL`].
fn label_column_width(rows: &[ChartRow]) -> usize {
    rows.iter()
        .map(|r| UnicodeWidthStr::width(r.label.as_str()))
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_COL)
}

/// Truncate and right-pad a label to the column width.
fn pad_label(label: &str, col: usize) -> String {
    crate::ui::helpers::pad_to_width(label, col)
}

/// Format a magnitude, dropping the fraction for whole numbers.
fn format_magnitude(magnitude: f64) -> String {
    if magnitude.fract() == 0.0 {
        format!("{}", magnitude as i64)
    } else {
        format!("{:.1}", magnitude)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[f64]) -> Vec<ChartRow> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ChartRow::new(format!("r{}", i), *v))
            .collect()
    }

    // -------------------- resolve_max Tests --------------------

    #[test]
    fn test_explicit_max_wins_verbatim() {
        let data = rows(&[10.0, 25.0, 15.0]);
        assert_eq!(resolve_max(&data, Some(3500.0)), 3500.0);
        // Even when below the true maximum
        assert_eq!(resolve_max(&data, Some(20.0)), 20.0);
    }

    #[test]
    fn test_auto_max_is_data_maximum() {
        let data = rows(&[10.0, 25.0, 15.0]);
        assert_eq!(resolve_max(&data, None), 25.0);
    }

    #[test]
    fn test_auto_max_of_empty_input_is_zero() {
        assert_eq!(resolve_max(&[], None), 0.0);
    }

    // -------------------- width_fraction Tests --------------------

    #[test]
    fn test_width_fraction_is_magnitude_over_max() {
        assert_eq!(width_fraction(1200.0, 3500.0), 1200.0 / 3500.0);
        assert_eq!(width_fraction(25.0, 25.0), 1.0);
    }

    #[test]
    fn test_width_fraction_can_exceed_one() {
        // Supplied maximum below the true maximum: the quirk is preserved
        assert!(width_fraction(30.0, 20.0) > 1.0);
        assert_eq!(width_fraction(30.0, 20.0), 1.5);
    }

    #[test]
    fn test_width_fraction_zero_max_is_zero_not_nan() {
        let fraction = width_fraction(10.0, 0.0);
        assert_eq!(fraction, 0.0);
        assert!(!fraction.is_nan());
    }

    // -------------------- bar_cells Tests --------------------

    #[test]
    fn test_bar_cells_scales_with_fraction() {
        assert_eq!(bar_cells(0.5, 40), 20);
        assert_eq!(bar_cells(1.0, 40), 40);
        assert_eq!(bar_cells(0.0, 40), 0);
    }

    #[test]
    fn test_bar_cells_saturates_at_available_width() {
        assert_eq!(bar_cells(1.5, 40), 40);
    }

    // -------------------- chart_lines Tests --------------------

    #[test]
    fn test_empty_input_renders_no_rows() {
        assert!(chart_lines(&[], None, 60).is_empty());
    }

    #[test]
    fn test_one_line_per_row() {
        let data = rows(&[10.0, 25.0, 15.0]);
        assert_eq!(chart_lines(&data, None, 60).len(), 3);
    }

    #[test]
    fn test_lines_carry_label_and_value() {
        let data = vec![ChartRow::new("Da'an", 12.0)];
        let lines = chart_lines(&data, None, 60);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Da'an"));
        assert!(text.contains("12"));
    }

    #[test]
    fn test_data_max_row_fills_available_space() {
        let data = rows(&[10.0, 25.0, 15.0]);
        let lines = chart_lines(&data, None, 60);
        let bar_len = |line: &Line| {
            line.spans
                .iter()
                .map(|s| s.content.matches(BAR_CELL).count())
                .sum::<usize>()
        };
        // Fractions 0.4 / 1.0 / 0.6 of the same bar space
        let max_bar = bar_len(&lines[1]);
        assert!(max_bar > 0);
        assert_eq!(bar_len(&lines[0]), (max_bar as f64 * 0.4).round() as usize);
        assert_eq!(bar_len(&lines[2]), (max_bar as f64 * 0.6).round() as usize);
    }

    #[test]
    fn test_whole_magnitudes_format_without_fraction() {
        assert_eq!(format_magnitude(3500.0), "3500");
        assert_eq!(format_magnitude(4.5), "4.5");
    }
}
