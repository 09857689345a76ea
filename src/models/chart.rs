//! Chart row abstraction for the bar chart widget.
//!
//! Each chartable dataset kind (trend points, price buckets, area buckets)
//! converts into a [`ChartRow`] carrying an explicit label and magnitude.
//! The conversion is the single place where "which field is the label and
//! which is the bar length" is decided per dataset kind, so the widget never
//! probes records for alternative field names.

use super::{AreaBucket, PriceBucket, TrendPoint};

/// One row of a bar chart: a label and the magnitude the bar visualizes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    /// Row label shown left of the bar
    pub label: String,
    /// Numeric value the bar length represents
    pub magnitude: f64,
}

impl ChartRow {
    /// Create a new chart row
    pub fn new(label: impl Into<String>, magnitude: f64) -> Self {
        Self {
            label: label.into(),
            magnitude,
        }
    }
}

impl From<&TrendPoint> for ChartRow {
    /// Trend points chart their average rent under the month label.
    fn from(point: &TrendPoint) -> Self {
        Self::new(point.month.clone(), f64::from(point.avg_rent))
    }
}

impl From<&PriceBucket> for ChartRow {
    /// Price buckets chart their listing count under the rent-band label.
    fn from(bucket: &PriceBucket) -> Self {
        Self::new(bucket.range.clone(), f64::from(bucket.count))
    }
}

impl From<&AreaBucket> for ChartRow {
    /// Area buckets chart their listing count under the district name.
    fn from(bucket: &AreaBucket) -> Self {
        Self::new(bucket.name.clone(), f64::from(bucket.count))
    }
}

/// Convert a slice of chartable records into chart rows, preserving order.
pub fn to_chart_rows<'a, T>(records: &'a [T]) -> Vec<ChartRow>
where
    ChartRow: From<&'a T>,
{
    records.iter().map(ChartRow::from).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_point_maps_avg_rent_to_magnitude() {
        let point = TrendPoint::new("Mar", 3100);
        let row = ChartRow::from(&point);
        assert_eq!(row.label, "Mar");
        assert_eq!(row.magnitude, 3100.0);
    }

    #[test]
    fn test_price_bucket_maps_count_to_magnitude() {
        let bucket = PriceBucket::new("NT$8k-12k", 14);
        let row = ChartRow::from(&bucket);
        assert_eq!(row.label, "NT$8k-12k");
        assert_eq!(row.magnitude, 14.0);
    }

    #[test]
    fn test_area_bucket_maps_count_to_magnitude() {
        let bucket = AreaBucket::new("Xinyi", 9);
        let row = ChartRow::from(&bucket);
        assert_eq!(row.label, "Xinyi");
        assert_eq!(row.magnitude, 9.0);
    }

    #[test]
    fn test_to_chart_rows_preserves_order() {
        let buckets = vec![
            AreaBucket::new("Da'an", 12),
            AreaBucket::new("Xinyi", 9),
            AreaBucket::new("Wanhua", 6),
        ];
        let rows = to_chart_rows(&buckets);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "Da'an");
        assert_eq!(rows[1].magnitude, 9.0);
        assert_eq!(rows[2].label, "Wanhua");
    }

    #[test]
    fn test_to_chart_rows_empty_input() {
        let rows = to_chart_rows::<AreaBucket>(&[]);
        assert!(rows.is_empty());
    }
}
