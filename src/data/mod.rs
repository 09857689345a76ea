//! Data provider interface for the statistics dashboard.
//!
//! The dashboard treats its data source as an opaque collaborator: five
//! zero-argument queries that return complete datasets synchronously. The UI
//! never computes, caches, or paginates these values. The only shipped
//! implementation is [`MockStatsProvider`], which returns fixed snapshots.

mod mock;

pub use mock::MockStatsProvider;

use serde::Serialize;

use crate::models::{AreaBucket, Listing, PriceBucket, TrendPoint, UserStats};

// ============================================================================
// Provider Trait
// ============================================================================

/// Source of the five statistics datasets.
///
/// Implementations must return synchronously and completely; there is no
/// pagination and no partial-result contract.
pub trait StatsProvider {
    /// Average rent per month for the recent trend window
    fn rent_trends(&self) -> Vec<TrendPoint>;

    /// The most popular listings, most popular first
    fn popular_listings(&self) -> Vec<Listing>;

    /// Listing counts per district
    fn area_distribution(&self) -> Vec<AreaBucket>;

    /// Listing counts per rent band
    fn price_distribution(&self) -> Vec<PriceBucket>;

    /// Aggregated user-behavior metrics
    fn user_behavior_stats(&self) -> UserStats;
}

// ============================================================================
// Eagerly Loaded Snapshot
// ============================================================================

/// All five datasets, loaded once at startup and held unchanged.
///
/// Mirrors the screen's lifecycle: queried eagerly on mount, read-only for
/// the lifetime of the view, dropped on exit.
#[derive(Debug, Clone, Serialize)]
pub struct Datasets {
    /// Rent trend points for the market tab
    pub rent_trends: Vec<TrendPoint>,
    /// Top listings for the popular tab
    pub popular_listings: Vec<Listing>,
    /// District counts for the distribution tab
    pub area_distribution: Vec<AreaBucket>,
    /// Rent-band counts for the market tab
    pub price_distribution: Vec<PriceBucket>,
    /// Behavior metrics for the behavior tab
    pub user_stats: UserStats,
}

impl Datasets {
    /// Load every dataset from the provider.
    pub fn load(provider: &dyn StatsProvider) -> Self {
        Self {
            rent_trends: provider.rent_trends(),
            popular_listings: provider.popular_listings(),
            area_distribution: provider.area_distribution(),
            price_distribution: provider.price_distribution(),
            user_stats: provider.user_behavior_stats(),
        }
    }

    /// Serialize the snapshot as pretty JSON (backs the `--dump-stats` flag).
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasets_load_pulls_all_five_queries() {
        let provider = MockStatsProvider::new();
        let datasets = Datasets::load(&provider);

        assert!(!datasets.rent_trends.is_empty());
        assert!(!datasets.popular_listings.is_empty());
        assert!(!datasets.area_distribution.is_empty());
        assert!(!datasets.price_distribution.is_empty());
        assert!(!datasets.user_stats.top_search_keywords.is_empty());
    }

    #[test]
    fn test_datasets_serialize_to_json() {
        let datasets = Datasets::load(&MockStatsProvider::new());
        let json = datasets.to_json_pretty().unwrap();
        assert!(json.contains("rent_trends"));
        assert!(json.contains("popular_listings"));
        assert!(json.contains("user_stats"));
    }
}
