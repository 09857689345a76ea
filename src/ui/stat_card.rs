//! Stat card widget.
//!
//! A small bordered card showing an icon glyph, a headline value, a label,
//! and an optional subtitle. The subtitle line is omitted entirely when
//! absent; nothing reserves its space.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Display inputs for one stat card.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    /// Metric label (e.g., "Total Views")
    pub title: String,
    /// Headline value (e.g., "15847" or "8m 32s")
    pub value: String,
    /// Icon glyph shown above the value
    pub icon: String,
    /// Optional extra context line under the label
    pub subtitle: Option<String>,
}

impl StatCard {
    /// Create a card without a subtitle.
    pub fn new(title: impl Into<String>, value: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            icon: icon.into(),
            subtitle: None,
        }
    }

    /// Builder-style setter for the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Build the card body lines: icon, value, title, and subtitle if any.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::raw(self.icon.clone()),
            Line::styled(
                self.value.clone(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.title.clone(), Style::default().fg(COLOR_DIM)),
        ];
        if let Some(subtitle) = &self.subtitle {
            lines.push(Line::styled(subtitle.clone(), Style::default().fg(COLOR_DIM)));
        }
        lines
    }
}

/// Render a stat card into the given area.
pub fn render(frame: &mut Frame, area: Rect, card: &StatCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(card.lines()).alignment(Alignment::Center),
        inner,
    );
}

// ============================================================================
// Tests
// ============================================================================
