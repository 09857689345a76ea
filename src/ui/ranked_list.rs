//! Ranked listing row widget.
//!
//! One entry of the popular-listings ranking: a 1-based rank badge, a
//! truncated title and address, and a stats line with rating, review count,
//! and rent range. The rank comes purely from input order; no listing field
//! influences it.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::models::Listing;
use crate::ui::helpers::{format_rating, format_rent_range, format_review_count, truncate_to_width};
use crate::ui::theme::{COLOR_DIM, COLOR_PRICE, COLOR_RANK, COLOR_RATING, COLOR_TEXT};

/// Width of the rank badge column, including trailing space
const BADGE_COL: usize = 5;

/// Rank badge text for a 0-based input position (e.g., index 0 -> " 1").
pub fn rank_label(index: usize) -> String {
    format!("{}", index + 1)
}

/// Build the three display lines for one ranked listing.
///
/// # Arguments
/// * `listing` - The listing to display
/// * `index` - 0-based position in provider order; rendered rank is `index + 1`
/// * `width` - Available line width in cells, used for truncation
pub fn listing_lines(listing: &Listing, index: usize, width: u16) -> Vec<Line<'static>> {
    let text_width = usize::from(width).saturating_sub(BADGE_COL);
    let badge = format!("{:>3}. ", rank_label(index));
    let indent = " ".repeat(BADGE_COL);

    let title_line = Line::from(vec![
        Span::styled(
            badge,
            Style::default().fg(COLOR_RANK).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate_to_width(&listing.title, text_width),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]);

    let address_line = Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(
            truncate_to_width(&listing.address, text_width),
            Style::default().fg(COLOR_DIM),
        ),
    ]);

    let stats_line = Line::from(vec![
        Span::raw(indent),
        Span::styled(format_rating(listing.avg_rating), Style::default().fg(COLOR_RATING)),
        Span::raw(" "),
        Span::styled(
            format_review_count(listing.reviews_count),
            Style::default().fg(COLOR_DIM),
        ),
        Span::raw("  "),
        Span::styled(
            format_rent_range(listing.rent_min, listing.rent_max),
            Style::default().fg(COLOR_PRICE).add_modifier(Modifier::BOLD),
        ),
    ]);

    vec![title_line, address_line, stats_line]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing(title: &str) -> Listing {
        Listing {
            id: "lst-1".to_string(),
            title: title.to_string(),
            address: "Lane 113, Sec. 3, Xinyi Rd., Da'an District".to_string(),
            avg_rating: 4.9,
            reviews_count: 312,
            rent_min: 12000,
            rent_max: 16000,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_rank_label_is_one_based_input_order() {
        assert_eq!(rank_label(0), "1");
        assert_eq!(rank_label(9), "10");
    }

    #[test]
    fn test_first_listing_gets_rank_one_regardless_of_fields() {
        // A listing with the worst rating still ranks by position
        let mut listing = make_listing("Worst Rated Place");
        listing.avg_rating = 1.2;
        let lines = listing_lines(&listing, 0, 80);
        assert!(line_text(&lines[0]).contains("1."));
    }

    #[test]
    fn test_row_has_title_address_and_stats_lines() {
        let listing = make_listing("Sunlit Studio by Da'an Park");
        let lines = listing_lines(&listing, 2, 80);
        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[0]).contains("Sunlit Studio"));
        assert!(line_text(&lines[1]).contains("Xinyi Rd."));

        let stats = line_text(&lines[2]);
        assert!(stats.contains("★ 4.9"));
        assert!(stats.contains("(312 reviews)"));
        assert!(stats.contains("NT$12000-16000"));
    }

    #[test]
    fn test_long_title_is_truncated_to_width() {
        let listing = make_listing(
            "An Extremely Long Listing Title That Cannot Possibly Fit On A Narrow Terminal Row",
        );
        let lines = listing_lines(&listing, 0, 40);
        let title = line_text(&lines[0]);
        assert!(title.contains('…'));
        assert!(title.chars().count() <= 40);
    }
}
