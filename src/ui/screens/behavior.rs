//! User behavior tab.
//!
//! Four stat cards in two rows (views, favorites, searches, session time)
//! followed by the ordered keyword-frequency list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::Datasets;
use crate::models::UserStats;
use crate::ui::helpers::truncate_to_width;
use crate::ui::layout::LayoutContext;
use crate::ui::stat_card::{self, StatCard};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_TEXT};

/// Height of one stat-card row: borders plus icon/value/title lines
const CARD_ROW_HEIGHT: u16 = 5;

/// Render the user behavior tab.
pub fn render(frame: &mut Frame, area: Rect, data: &Datasets, _ctx: &LayoutContext) {
    let stats = &data.user_stats;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CARD_ROW_HEIGHT), // views / favorites
            Constraint::Length(CARD_ROW_HEIGHT), // searches / session
            Constraint::Min(3),                  // keyword list
        ])
        .split(area);

    let cards = behavior_cards(stats);
    render_card_row(frame, chunks[0], &cards[0], &cards[1]);
    render_card_row(frame, chunks[1], &cards[2], &cards[3]);
    render_keyword_list(frame, chunks[2], stats);
}

/// Build the four behavior stat cards, in display order.
pub fn behavior_cards(stats: &UserStats) -> [StatCard; 4] {
    [
        StatCard::new("Total Views", stats.total_views.to_string(), "👀"),
        StatCard::new("Total Favorites", stats.total_favorites.to_string(), "❤️"),
        StatCard::new("Total Searches", stats.total_searches.to_string(), "🔍"),
        StatCard::new("Avg. Session", stats.avg_session_time.clone(), "⏱"),
    ]
}

fn render_card_row(frame: &mut Frame, area: Rect, left: &StatCard, right: &StatCard) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    stat_card::render(frame, halves[0], left);
    stat_card::render(frame, halves[1], right);
}

fn render_keyword_list(frame: &mut Frame, area: Rect, stats: &UserStats) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Top Search Keywords ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let keyword_col = usize::from(inner.width).saturating_sub(8);
    let lines: Vec<Line<'static>> = stats
        .top_search_keywords
        .iter()
        .map(|entry| {
            let keyword = truncate_to_width(&entry.keyword, keyword_col);
            let pad =
                keyword_col.saturating_sub(unicode_width::UnicodeWidthStr::width(keyword.as_str()));
            Line::from(vec![
                Span::styled(keyword, Style::default().fg(COLOR_TEXT)),
                Span::raw(" ".repeat(pad + 1)),
                Span::styled(format!("{}x", entry.count), Style::default().fg(COLOR_ACCENT)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Tests
// ============================================================================
