//! Color theme constants for the dashboard UI.
//!
//! The palette pairs a muted slate blue for bars and accents with a warm
//! orange reserved for ratings.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Brand accent - muted slate blue #9BB7D4
pub const COLOR_ACCENT: Color = Color::Rgb(155, 183, 212);

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for labels and less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Plain value text
pub const COLOR_TEXT: Color = Color::White;

// ============================================================================
// Widget Colors
// ============================================================================

/// Bar chart fill color
pub const COLOR_BAR: Color = Color::Rgb(155, 183, 212);

/// Star rating color - warm orange #FF6B35
pub const COLOR_RATING: Color = Color::Rgb(255, 107, 53);

/// Price text color
pub const COLOR_PRICE: Color = Color::Rgb(155, 183, 212);

/// Rank badge color
pub const COLOR_RANK: Color = Color::Rgb(155, 183, 212);
