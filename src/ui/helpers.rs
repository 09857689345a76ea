//! Small formatting helpers shared across UI components.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to a display width, appending `…` when cut.
///
/// Width is measured in terminal cells via unicode-width, so CJK labels
/// truncate correctly.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Reserve one cell for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Truncate and right-pad a string to an exact display width.
///
/// Padding counts terminal cells, not chars, so columns containing CJK
/// district names stay aligned.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let used = UnicodeWidthStr::width(text.as_str());
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

/// Format a min-max monthly rent range as an NT$ currency string.
pub fn format_rent_range(rent_min: u32, rent_max: u32) -> String {
    format!("NT${}-{}", rent_min, rent_max)
}

/// Format a star rating (e.g., "★ 4.8").
pub fn format_rating(avg_rating: f64) -> String {
    format!("★ {:.1}", avg_rating)
}

/// Format a review count (e.g., "(312 reviews)").
pub fn format_review_count(reviews_count: u32) -> String {
    format!("({} reviews)", reviews_count)
}

/// Format a count as a share of a fixed denominator, one decimal (e.g., "24.0%").
pub fn format_percent_of(count: u32, denominator: u32) -> String {
    if denominator == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", (f64::from(count) / f64::from(denominator)) * 100.0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------- Truncation Tests --------------------

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_cjk_counts_double_width() {
        // Each CJK char is 2 cells; 5 cells fit two chars plus the ellipsis
        assert_eq!(truncate_to_width("大安區信義", 5), "大安…");
    }

    // -------------------- Padding Tests --------------------

    #[test]
    fn test_pad_to_width_fills_with_spaces() {
        assert_eq!(pad_to_width("Da'an", 8), "Da'an   ");
        assert_eq!(pad_to_width("Songshan", 8), "Songshan");
    }

    #[test]
    fn test_pad_to_width_counts_cjk_cells() {
        // Three CJK chars occupy six cells; two spaces complete the column
        assert_eq!(pad_to_width("大安區", 8), "大安區  ");
    }

    #[test]
    fn test_pad_to_width_truncates_overflow() {
        assert_eq!(pad_to_width("Zhongzheng District", 8), "Zhongze…");
    }

    // -------------------- Formatting Tests --------------------

    #[test]
    fn test_format_rent_range() {
        assert_eq!(format_rent_range(8000, 12000), "NT$8000-12000");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.8), "★ 4.8");
        assert_eq!(format_rating(4.0), "★ 4.0");
    }

    #[test]
    fn test_format_review_count() {
        assert_eq!(format_review_count(312), "(312 reviews)");
    }

    #[test]
    fn test_format_percent_of_fixed_denominator() {
        assert_eq!(format_percent_of(12, 50), "24.0%");
        assert_eq!(format_percent_of(9, 50), "18.0%");
        assert_eq!(format_percent_of(50, 50), "100.0%");
    }

    #[test]
    fn test_format_percent_of_zero_denominator() {
        assert_eq!(format_percent_of(12, 0), "0.0%");
    }
}
