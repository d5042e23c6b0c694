use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// DataPoint – one (year, value) observation
// ---------------------------------------------------------------------------

/// A single observation: one value for one year.
/// Immutable once loaded; datasets never mutate their points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub year: i32,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Unit – value dimension, drives axis and tooltip formatting
// ---------------------------------------------------------------------------

/// What the `value` axis of a dataset measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Wine production in tonnes.
    Tonnes,
    /// Alcohol consumption in litres of pure alcohol per capita.
    LitresPerCapita,
}

impl Unit {
    /// Format a value for axis labels and tooltips.
    pub fn format(&self, value: f64) -> String {
        match self {
            Unit::Tonnes => {
                if value >= 1_000_000.0 {
                    format!("{:.2} Mt", value / 1_000_000.0)
                } else if value >= 1_000.0 {
                    format!("{:.0} kt", value / 1_000.0)
                } else {
                    format!("{value:.0} t")
                }
            }
            Unit::LitresPerCapita => format!("{value:.1} L"),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Tonnes => write!(f, "tonnes"),
            Unit::LitresPerCapita => write!(f, "litres per capita"),
        }
    }
}

// ---------------------------------------------------------------------------
// DataError – invariant violations surfaced at load time
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataError {
    #[error("duplicate year {0} in dataset")]
    DuplicateYear(i32),
    #[error("negative value {value} for year {year}")]
    NegativeValue { year: i32, value: f64 },
    #[error("dataset contains no points")]
    Empty,
}

// ---------------------------------------------------------------------------
// Dataset – one labeled series, sorted by year
// ---------------------------------------------------------------------------

/// A labeled time series, sorted by year ascending.
///
/// Invariants (enforced by [`Dataset::from_points`]): years are unique,
/// values are non-negative, at least one point exists.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub label: String,
    pub unit: Unit,
    points: Vec<DataPoint>,
}

impl Dataset {
    /// Build a dataset from raw points: sort by year, validate invariants.
    pub fn from_points(
        label: impl Into<String>,
        unit: Unit,
        mut points: Vec<DataPoint>,
    ) -> Result<Self, DataError> {
        if points.is_empty() {
            return Err(DataError::Empty);
        }
        points.sort_by_key(|p| p.year);
        for pair in points.windows(2) {
            if pair[0].year == pair[1].year {
                return Err(DataError::DuplicateYear(pair[0].year));
            }
        }
        if let Some(p) = points.iter().find(|p| p.value < 0.0) {
            return Err(DataError::NegativeValue {
                year: p.year,
                value: p.value,
            });
        }
        Ok(Dataset {
            label: label.into(),
            unit,
            points,
        })
    }

    /// All points, year ascending.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value in the series.
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// First and last year of the series.
    pub fn year_extent(&self) -> (i32, i32) {
        // from_points rejects empty datasets, so first/last always exist
        (
            self.points.first().map(|p| p.year).unwrap_or(0),
            self.points.last().map(|p| p.year).unwrap_or(0),
        )
    }

    /// Exact-year lookup via binary search over the sorted points.
    pub fn point_at(&self, year: i32) -> Option<&DataPoint> {
        self.points
            .binary_search_by_key(&year, |p| p.year)
            .ok()
            .map(|i| &self.points[i])
    }
}

// ---------------------------------------------------------------------------
// TrendData – the two loaded series
// ---------------------------------------------------------------------------

/// Both datasets the narrative compares.
#[derive(Debug, Clone)]
pub struct TrendData {
    pub production: Dataset,
    pub consumption: Dataset,
}

impl TrendData {
    /// Union of both series' year ranges.
    pub fn combined_extent(&self) -> (i32, i32) {
        let (p_lo, p_hi) = self.production.year_extent();
        let (c_lo, c_hi) = self.consumption.year_extent();
        (p_lo.min(c_lo), p_hi.max(c_hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(year: i32, value: f64) -> DataPoint {
        DataPoint { year, value }
    }

    #[test]
    fn from_points_sorts_by_year() {
        let ds = Dataset::from_points(
            "wine",
            Unit::Tonnes,
            vec![pt(1962, 90.0), pt(1960, 100.0), pt(1961, 150.0)],
        )
        .unwrap();
        let years: Vec<i32> = ds.points().iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1960, 1961, 1962]);
    }

    #[test]
    fn duplicate_years_rejected() {
        let err = Dataset::from_points(
            "wine",
            Unit::Tonnes,
            vec![pt(1960, 1.0), pt(1960, 2.0)],
        )
        .unwrap_err();
        assert!(matches!(err, DataError::DuplicateYear(1960)));
    }

    #[test]
    fn negative_values_rejected() {
        let err = Dataset::from_points("wine", Unit::Tonnes, vec![pt(1960, -1.0)]).unwrap_err();
        assert!(matches!(err, DataError::NegativeValue { year: 1960, .. }));
    }

    #[test]
    fn empty_rejected() {
        let err = Dataset::from_points("wine", Unit::Tonnes, vec![]).unwrap_err();
        assert!(matches!(err, DataError::Empty));
    }

    #[test]
    fn extent_and_max() {
        let ds = Dataset::from_points(
            "wine",
            Unit::Tonnes,
            vec![pt(1960, 100.0), pt(1961, 150.0), pt(1962, 90.0)],
        )
        .unwrap();
        assert_eq!(ds.year_extent(), (1960, 1962));
        assert_eq!(ds.max_value(), 150.0);
    }

    #[test]
    fn exact_year_lookup() {
        let ds = Dataset::from_points(
            "wine",
            Unit::Tonnes,
            vec![pt(1960, 100.0), pt(1961, 150.0)],
        )
        .unwrap();
        assert_eq!(ds.point_at(1961).unwrap().value, 150.0);
        assert!(ds.point_at(1999).is_none());
    }

    #[test]
    fn combined_extent_spans_both_series() {
        let data = TrendData {
            production: Dataset::from_points(
                "wine",
                Unit::Tonnes,
                vec![pt(1961, 1.0), pt(1970, 2.0)],
            )
            .unwrap(),
            consumption: Dataset::from_points(
                "alcohol",
                Unit::LitresPerCapita,
                vec![pt(1965, 1.0), pt(1980, 2.0)],
            )
            .unwrap(),
        };
        assert_eq!(data.combined_extent(), (1961, 1980));
    }

    #[test]
    fn unit_formatting() {
        assert_eq!(Unit::Tonnes.format(6_930_000.0), "6.93 Mt");
        assert_eq!(Unit::Tonnes.format(12_000.0), "12 kt");
        assert_eq!(Unit::Tonnes.format(120.0), "120 t");
        assert_eq!(Unit::LitresPerCapita.format(16.07), "16.1 L");
    }
}
