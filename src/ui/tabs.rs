//! Tab selector line.
//!
//! Horizontal selector over the four statistics tabs, with a `▶` marker on
//! the active tab and responsive label sizing on compact terminals.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::Tab;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_TEXT};

/// Render the tab selector as a single line.
pub fn render_tab_line(active: Tab, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    spans.push(Span::raw("  "));

    for (idx, tab) in Tab::ALL.iter().enumerate() {
        let label = if ctx.is_compact() {
            tab.short_label()
        } else {
            tab.label()
        };
        let hotkey = format!("{} ", idx + 1);

        if *tab == active {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(hotkey, Style::default().fg(COLOR_DIM)));
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("  ".to_string(), Style::default().fg(COLOR_DIM)));
            spans.push(Span::styled(hotkey, Style::default().fg(COLOR_DIM)));
            spans.push(Span::styled(label.to_string(), Style::default().fg(COLOR_DIM)));
        }

        if idx < Tab::ALL.len() - 1 {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_sits_on_active_tab() {
        let ctx = LayoutContext::new(100, 40);
        let text = line_text(&render_tab_line(Tab::Behavior, &ctx));

        let marker_pos = text.find('▶').unwrap();
        let behavior_pos = text.find("User Behavior").unwrap();
        let popular_pos = text.find("Popular Listings").unwrap();
        assert!(marker_pos > popular_pos);
        assert!(marker_pos < behavior_pos);
    }

    #[test]
    fn test_all_tabs_listed_with_hotkeys() {
        let ctx = LayoutContext::new(120, 40);
        let text = line_text(&render_tab_line(Tab::Market, &ctx));
        for (idx, tab) in Tab::ALL.iter().enumerate() {
            assert!(text.contains(tab.label()));
            assert!(text.contains(&format!("{} ", idx + 1)));
        }
    }

    #[test]
    fn test_compact_terminals_use_short_labels() {
        let ctx = LayoutContext::new(64, 18);
        let text = line_text(&render_tab_line(Tab::Market, &ctx));
        assert!(text.contains("Areas"));
        assert!(!text.contains("Area Distribution"));
    }
}
