//! Screen state for the statistics dashboard.
//!
//! The screen holds exactly one piece of UI state: which tab is active. Tab
//! changes are triggered only by direct user selection; there are no guards,
//! no side effects, and no history stack.

// ============================================================================
// Tab
// ============================================================================

/// The four mutually exclusive display modes of the statistics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Rent trends and price distribution charts
    #[default]
    Market,
    /// Top 10 popular listings
    Popular,
    /// User behavior metrics and search keywords
    Behavior,
    /// Geographic distribution of listings
    Distribution,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Market, Tab::Popular, Tab::Behavior, Tab::Distribution];

    /// Full label shown on normal-sized terminals
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Market => "Market Analysis",
            Tab::Popular => "Popular Listings",
            Tab::Behavior => "User Behavior",
            Tab::Distribution => "Area Distribution",
        }
    }

    /// Short label shown on compact terminals
    pub fn short_label(&self) -> &'static str {
        match self {
            Tab::Market => "Market",
            Tab::Popular => "Popular",
            Tab::Behavior => "Behavior",
            Tab::Distribution => "Areas",
        }
    }

    /// Position of this tab in [`Tab::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Tab::Market => 0,
            Tab::Popular => 1,
            Tab::Behavior => 2,
            Tab::Distribution => 3,
        }
    }

    /// Tab for a 0-based position, if in range
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    /// The tab to the right, wrapping around
    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// The tab to the left, wrapping around
    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

// ============================================================================
// Screen State
// ============================================================================

/// UI state owned by the screen controller: the active tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenState {
    active: Tab,
}

impl ScreenState {
    /// Create a new screen state on the initial (Market) tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active tab
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Select a tab directly. Selecting the active tab is a no-op.
    pub fn select(&mut self, tab: Tab) {
        if self.active != tab {
            tracing::debug!(previous = ?self.active, selected = ?tab, "tab selected");
            self.active = tab;
        }
    }

    /// Select the tab to the right, wrapping around.
    pub fn select_next(&mut self) {
        self.select(self.active.next());
    }

    /// Select the tab to the left, wrapping around.
    pub fn select_prev(&mut self) {
        self.select(self.active.prev());
    }
}

// ============================================================================
// Tests
// ============================================================================
