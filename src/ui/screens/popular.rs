//! Popular listings tab.
//!
//! The top 10 listings in provider-supplied order, each rendered as a ranked
//! row with a blank separator line between entries.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::Datasets;
use crate::ui::layout::LayoutContext;
use crate::ui::ranked_list;
use crate::ui::theme::COLOR_BORDER;

/// How many listings the ranking shows
pub const TOP_LISTING_COUNT: usize = 10;

/// Render the popular listings tab.
///
/// `scroll` is the vertical content offset in lines; the full ranking is
/// taller than a small terminal, so Up/Down paging reaches the lower ranks.
pub fn render(frame: &mut Frame, area: Rect, data: &Datasets, _ctx: &LayoutContext, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Top 10 Popular Listings ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (index, listing) in data
        .popular_listings
        .iter()
        .take(TOP_LISTING_COUNT)
        .enumerate()
    {
        if index > 0 {
            lines.push(Line::raw(""));
        }
        lines.extend(ranked_list::listing_lines(listing, index, inner.width));
    }

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}
