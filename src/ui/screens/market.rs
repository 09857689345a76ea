//! Market analysis tab.
//!
//! Two bar charts: the rent trend against a fixed scale maximum, and the
//! price distribution with an auto-computed maximum.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::data::Datasets;
use crate::models::to_chart_rows;
use crate::ui::bar_chart;
use crate::ui::layout::LayoutContext;

/// Fixed scale maximum for the rent trend chart.
///
/// Used verbatim: months above it would draw past 100% width, which the
/// chart preserves as a width fraction above 1.0.
pub const RENT_TREND_MAX: f64 = 3500.0;

/// Render the market analysis tab.
pub fn render(frame: &mut Frame, area: Rect, data: &Datasets, _ctx: &LayoutContext) {
    let trend_rows = to_chart_rows(&data.rent_trends);
    let price_rows = to_chart_rows(&data.price_distribution);

    // Each chart needs its rows plus two border lines
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(trend_rows.len() as u16 + 2), // rent trend chart
            Constraint::Length(price_rows.len() as u16 + 2), // price distribution chart
            Constraint::Min(0),
        ])
        .split(area);

    bar_chart::render(
        frame,
        chunks[0],
        "Rent Trend (last 6 months)",
        &trend_rows,
        Some(RENT_TREND_MAX),
    );
    bar_chart::render(frame, chunks[1], "Price Distribution", &price_rows, None);
}
