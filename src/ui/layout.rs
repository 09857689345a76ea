//! Responsive layout helpers.
//!
//! `LayoutContext` encapsulates terminal dimensions and is passed to render
//! functions that make responsive decisions (compact tab labels, stacked
//! stat cards).

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Whether the terminal is too small for full labels.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::SM_WIDTH || self.height < breakpoints::SM_HEIGHT
    }

    /// Whether the terminal is extremely narrow.
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }
}

// ============================================================================
// Tests
// ============================================================================
