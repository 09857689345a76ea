//! Display records for the statistics dashboard.
//!
//! Every type here is an immutable snapshot supplied by a
//! [`StatsProvider`](crate::data::StatsProvider). The UI layer only reads
//! these records; nothing mutates them after load.

mod chart;

pub use chart::{to_chart_rows, ChartRow};

use serde::{Deserialize, Serialize};

// ============================================================================
// Market Trend Records
// ============================================================================

/// One point on the rent trend chart: a month and its average rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Month label (e.g., "Jan")
    pub month: String,
    /// Average rent for the month, in NT$
    pub avg_rent: u32,
}

impl TrendPoint {
    /// Create a new trend point
    pub fn new(month: impl Into<String>, avg_rent: u32) -> Self {
        Self {
            month: month.into(),
            avg_rent,
        }
    }
}

// ============================================================================
// Listings
// ============================================================================

/// A rental listing shown in the popular-listings ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier
    pub id: String,
    /// Listing title
    pub title: String,
    /// Street address
    pub address: String,
    /// Average review rating (0.0 - 5.0)
    pub avg_rating: f64,
    /// Number of reviews behind the rating
    pub reviews_count: u32,
    /// Lower bound of the monthly rent, in NT$
    pub rent_min: u32,
    /// Upper bound of the monthly rent, in NT$
    pub rent_max: u32,
}

impl Listing {
    /// Check the rent range invariant (`rent_min <= rent_max`).
    pub fn has_valid_rent_range(&self) -> bool {
        self.rent_min <= self.rent_max
    }
}

// ============================================================================
// Distribution Buckets
// ============================================================================

/// Listing count for one administrative district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaBucket {
    /// District name
    pub name: String,
    /// Number of listings in the district
    pub count: u32,
}

impl AreaBucket {
    /// Create a new area bucket
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Listing count for one monthly-rent band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBucket {
    /// Rent band label (e.g., "NT$8k-12k")
    pub range: String,
    /// Number of listings in the band
    pub count: u32,
}

impl PriceBucket {
    /// Create a new price bucket
    pub fn new(range: impl Into<String>, count: u32) -> Self {
        Self {
            range: range.into(),
            count,
        }
    }
}

// ============================================================================
// User Behavior
// ============================================================================

/// A search keyword and how often users searched for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCount {
    /// The search term
    pub keyword: String,
    /// How many times it was searched
    pub count: u32,
}

/// Aggregated user-behavior metrics for the behavior tab.
///
/// `avg_session_time` arrives pre-formatted from the provider; the UI never
/// parses or recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Total listing page views
    pub total_views: u32,
    /// Total listings saved as favorites
    pub total_favorites: u32,
    /// Total searches performed
    pub total_searches: u32,
    /// Average session duration as a display string (e.g., "8m 32s")
    pub avg_session_time: String,
    /// Most-searched keywords, in provider order (most frequent first)
    pub top_search_keywords: Vec<KeywordCount>,
}

// ============================================================================
// Tests
// ============================================================================
