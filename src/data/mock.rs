//! Fixed mock datasets for the statistics dashboard.
//!
//! Snapshot of a Taipei rental market. Values are stable across calls so the
//! UI renders identically on every frame; nothing here is computed.

use super::StatsProvider;
use crate::models::{AreaBucket, KeywordCount, Listing, PriceBucket, TrendPoint, UserStats};

/// Statistics provider backed by fixed in-memory data.
#[derive(Debug, Clone, Default)]
pub struct MockStatsProvider;

impl MockStatsProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self
    }
}

fn listing(
    id: &str,
    title: &str,
    address: &str,
    avg_rating: f64,
    reviews_count: u32,
    rent_min: u32,
    rent_max: u32,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        address: address.to_string(),
        avg_rating,
        reviews_count,
        rent_min,
        rent_max,
    }
}

impl StatsProvider for MockStatsProvider {
    fn rent_trends(&self) -> Vec<TrendPoint> {
        vec![
            TrendPoint::new("Jan", 2800),
            TrendPoint::new("Feb", 2950),
            TrendPoint::new("Mar", 3100),
            TrendPoint::new("Apr", 3050),
            TrendPoint::new("May", 3200),
            TrendPoint::new("Jun", 3350),
        ]
    }

    fn popular_listings(&self) -> Vec<Listing> {
        vec![
            listing(
                "lst-001",
                "Sunlit Studio by Da'an Park",
                "Lane 113, Sec. 3, Xinyi Rd., Da'an District",
                4.9,
                312,
                12000,
                16000,
            ),
            listing(
                "lst-002",
                "Modern 2BR near Taipei 101",
                "No. 45, Songzhi Rd., Xinyi District",
                4.8,
                287,
                22000,
                28000,
            ),
            listing(
                "lst-003",
                "Renovated Loft at Zhongshan",
                "No. 18, Lane 33, Zhongshan N. Rd., Zhongshan District",
                4.8,
                254,
                15000,
                19000,
            ),
            listing(
                "lst-004",
                "Quiet Suite next to Songshan Station",
                "No. 7, Bade Rd. Sec. 4, Songshan District",
                4.7,
                231,
                11000,
                14000,
            ),
            listing(
                "lst-005",
                "Riverside Room in Wanhua",
                "No. 120, Huanhe S. Rd., Wanhua District",
                4.7,
                198,
                8000,
                10000,
            ),
            listing(
                "lst-006",
                "Tech-Park Apartment in Neihu",
                "No. 88, Ruiguang Rd., Neihu District",
                4.6,
                176,
                14000,
                18000,
            ),
            listing(
                "lst-007",
                "Cozy Attic by Shida Night Market",
                "Lane 39, Longquan St., Da'an District",
                4.6,
                163,
                9000,
                11500,
            ),
            listing(
                "lst-008",
                "Family Flat near Elephant Mountain",
                "No. 22, Alley 5, Lane 150, Xinyi Rd. Sec. 5, Xinyi District",
                4.5,
                151,
                25000,
                32000,
            ),
            listing(
                "lst-009",
                "Compact Studio at Minquan W. Rd.",
                "No. 61, Minquan W. Rd., Zhongshan District",
                4.5,
                139,
                8500,
                10500,
            ),
            listing(
                "lst-010",
                "Balcony Suite by Raohe Market",
                "No. 201, Raohe St., Songshan District",
                4.4,
                128,
                13000,
                17000,
            ),
        ]
    }

    fn area_distribution(&self) -> Vec<AreaBucket> {
        vec![
            AreaBucket::new("Da'an", 12),
            AreaBucket::new("Xinyi", 9),
            AreaBucket::new("Zhongshan", 8),
            AreaBucket::new("Neihu", 8),
            AreaBucket::new("Songshan", 7),
            AreaBucket::new("Wanhua", 6),
        ]
    }

    fn price_distribution(&self) -> Vec<PriceBucket> {
        vec![
            PriceBucket::new("Under NT$8k", 6),
            PriceBucket::new("NT$8k-12k", 14),
            PriceBucket::new("NT$12k-18k", 18),
            PriceBucket::new("NT$18k-25k", 8),
            PriceBucket::new("Over NT$25k", 4),
        ]
    }

    fn user_behavior_stats(&self) -> UserStats {
        UserStats {
            total_views: 15847,
            total_favorites: 2341,
            total_searches: 5672,
            avg_session_time: "8m 32s".to_string(),
            top_search_keywords: vec![
                KeywordCount {
                    keyword: "Da'an District".to_string(),
                    count: 892,
                },
                KeywordCount {
                    keyword: "near MRT".to_string(),
                    count: 756,
                },
                KeywordCount {
                    keyword: "pet friendly".to_string(),
                    count: 534,
                },
                KeywordCount {
                    keyword: "studio".to_string(),
                    count: 421,
                },
                KeywordCount {
                    keyword: "balcony".to_string(),
                    count: 318,
                },
            ],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
