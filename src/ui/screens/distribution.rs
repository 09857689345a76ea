//! Area distribution tab.
//!
//! A bar chart of listing counts per district plus a summary grid showing
//! each district's count and its share of a fixed denominator.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::Datasets;
use crate::models::{to_chart_rows, AreaBucket};
use crate::ui::bar_chart;
use crate::ui::helpers::{format_percent_of, pad_to_width};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_TEXT};

/// Fixed denominator for the summary percentages.
///
/// Shares are computed against 50 rather than the sum of all area counts,
/// so the column reads as "out of the 50 tracked listings" even when a
/// district list is partial.
pub const AREA_PERCENT_DENOMINATOR: u32 = 50;

/// Render the area distribution tab.
pub fn render(frame: &mut Frame, area: Rect, data: &Datasets, _ctx: &LayoutContext) {
    let rows = to_chart_rows(&data.area_distribution);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows.len() as u16 + 2), // district chart
            Constraint::Min(3),                        // summary grid
        ])
        .split(area);

    bar_chart::render(frame, chunks[0], "Listings per District", &rows, None);
    render_summary(frame, chunks[1], &data.area_distribution);
}

fn render_summary(frame: &mut Frame, area: Rect, areas: &[AreaBucket]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Area Summary ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let lines: Vec<Line<'static>> = areas.iter().map(summary_line).collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// One summary row: district name, listing count, percentage of the fixed
/// denominator formatted to one decimal.
pub fn summary_line(bucket: &AreaBucket) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            pad_to_width(&bucket.name, 12),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>3} listings", bucket.count),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::raw("   "),
        Span::styled(
            format_percent_of(bucket.count, AREA_PERCENT_DENOMINATOR),
            Style::default().fg(COLOR_DIM),
        ),
    ])
}

// ============================================================================
// Tests
// ============================================================================
