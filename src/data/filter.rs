use super::model::DataPoint;

// ---------------------------------------------------------------------------
// YearRange – the exploration view's inclusive year interval
// ---------------------------------------------------------------------------

/// An inclusive `[lo, hi]` year interval driven by the exploration slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub lo: i32,
    pub hi: i32,
}

impl YearRange {
    pub fn new(lo: i32, hi: i32) -> Self {
        YearRange { lo, hi }
    }

    /// Clamp both bounds into `extent` and keep `lo <= hi`.
    pub fn clamped(self, extent: (i32, i32)) -> Self {
        let lo = self.lo.clamp(extent.0, extent.1);
        let hi = self.hi.clamp(extent.0, extent.1);
        YearRange {
            lo: lo.min(hi),
            hi: lo.max(hi),
        }
    }
}

impl From<(i32, i32)> for YearRange {
    fn from((lo, hi): (i32, i32)) -> Self {
        YearRange { lo, hi }
    }
}

// ---------------------------------------------------------------------------
// Range filter – derived view over a year-sorted slice
// ---------------------------------------------------------------------------

/// Return the sub-slice of `points` with `lo <= year <= hi`.
///
/// Points must be sorted by year ascending (a [`Dataset`](super::model::Dataset)
/// guarantees this).  The source is never copied or mutated, so filtering is
/// referentially transparent and trivially idempotent.
pub fn filter_range(points: &[DataPoint], range: YearRange) -> &[DataPoint] {
    filter_span(points, range.lo as f64, range.hi as f64)
}

/// Fractional-bound variant used while the view range is animating.
pub fn filter_span(points: &[DataPoint], lo: f64, hi: f64) -> &[DataPoint] {
    let start = points.partition_point(|p| (p.year as f64) < lo);
    let end = points.partition_point(|p| (p.year as f64) <= hi);
    &points[start..end.max(start)]
}

// ---------------------------------------------------------------------------
// Nearest-point lookup – hover readout over a continuous year axis
// ---------------------------------------------------------------------------

/// Find the point whose year is closest to `year`.
///
/// Binary search locates the straddling pair, then the closer neighbour wins.
/// On an exact midpoint the later point wins.  Queries beyond either end of
/// the series clamp to the first/last point.
pub fn nearest_point(points: &[DataPoint], year: f64) -> Option<&DataPoint> {
    if points.is_empty() {
        return None;
    }
    let i = points.partition_point(|p| (p.year as f64) < year);
    if i == 0 {
        return points.first();
    }
    if i == points.len() {
        return points.last();
    }
    let before = &points[i - 1];
    let after = &points[i];
    let d_before = year - before.year as f64;
    let d_after = after.year as f64 - year;
    if d_before < d_after {
        Some(before)
    } else {
        Some(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(years: &[i32]) -> Vec<DataPoint> {
        years
            .iter()
            .map(|&year| DataPoint {
                year,
                value: year as f64,
            })
            .collect()
    }

    #[test]
    fn range_filter_is_inclusive_and_ordered() {
        let points = pts(&[1960, 1961, 1962, 1963, 1964]);
        let filtered = filter_range(&points, YearRange::new(1961, 1963));
        let years: Vec<i32> = filtered.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1961, 1962, 1963]);
    }

    #[test]
    fn range_filter_is_idempotent() {
        let points = pts(&[1960, 1961, 1962, 1963, 1964]);
        let range = YearRange::new(1961, 1963);
        let once = filter_range(&points, range);
        let twice = filter_range(once, range);
        assert_eq!(once, twice);
    }

    #[test]
    fn range_filter_empty_when_disjoint() {
        let points = pts(&[1960, 1961, 1962]);
        assert!(filter_range(&points, YearRange::new(1990, 1995)).is_empty());
    }

    #[test]
    fn range_filter_full_extent_returns_everything() {
        let points = pts(&[1960, 1961, 1962]);
        assert_eq!(filter_range(&points, YearRange::new(1960, 1962)), &points[..]);
    }

    #[test]
    fn nearest_picks_closer_neighbour() {
        let points = pts(&[1960, 1961, 1962]);
        assert_eq!(nearest_point(&points, 1960.4).unwrap().year, 1960);
        assert_eq!(nearest_point(&points, 1960.6).unwrap().year, 1961);
    }

    #[test]
    fn nearest_midpoint_prefers_later_point() {
        let points = pts(&[1960, 1961]);
        assert_eq!(nearest_point(&points, 1960.5).unwrap().year, 1961);
    }

    #[test]
    fn nearest_clamps_beyond_extent() {
        let points = pts(&[1960, 1961, 1962]);
        assert_eq!(nearest_point(&points, 1900.0).unwrap().year, 1960);
        assert_eq!(nearest_point(&points, 2020.0).unwrap().year, 1962);
    }

    #[test]
    fn nearest_on_empty_is_none() {
        assert!(nearest_point(&[], 1960.0).is_none());
    }

    #[test]
    fn clamped_range_stays_in_extent() {
        let range = YearRange::new(1900, 2050).clamped((1961, 2018));
        assert_eq!(range, YearRange::new(1961, 2018));
        let inverted = YearRange::new(2000, 1990).clamped((1961, 2018));
        assert_eq!(inverted, YearRange::new(1990, 2000));
    }
}
