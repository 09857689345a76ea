//! UI composition for the statistics dashboard.
//!
//! `render` is the single entry point called on every frame: it draws the
//! header band and tab selector, then dispatches to the active tab's screen.

pub mod bar_chart;
pub mod helpers;
pub mod layout;
pub mod ranked_list;
pub mod screens;
pub mod stat_card;
pub mod tabs;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::Tab;
use layout::LayoutContext;
use theme::{COLOR_DIM, COLOR_HEADER};

/// Render one frame of the dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header band
            Constraint::Length(2), // tab selector
            Constraint::Min(0),    // tab content
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_tabs(frame, chunks[1], app.active_tab(), &ctx);
    render_content(frame, chunks[2], app, &ctx);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "  Market Statistics",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "  Rental market trends at a glance",
            Style::default().fg(COLOR_DIM),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, active: Tab, ctx: &LayoutContext) {
    frame.render_widget(Paragraph::new(tabs::render_tab_line(active, ctx)), area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let data = app.datasets();
    match app.active_tab() {
        Tab::Market => screens::market::render(frame, area, data, ctx),
        Tab::Popular => screens::popular::render(frame, area, data, ctx, app.scroll()),
        Tab::Behavior => screens::behavior::render(frame, area, data, ctx),
        Tab::Distribution => screens::distribution::render(frame, area, data, ctx),
    }
}

// ============================================================================
// Tests
// ============================================================================
