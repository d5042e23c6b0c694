/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  wine_production.csv    alcohol_consumption.csv
///        │                        │
///        └──────────┬─────────────┘
///                   ▼
///             ┌──────────┐
///             │  loader   │  parse + coerce → Dataset (per file)
///             └──────────┘
///                   │
///                   ▼
///             ┌──────────┐
///             │ TrendData │  {production, consumption}, year-sorted
///             └──────────┘
///                   │
///                   ▼
///             ┌──────────┐
///             │  filter   │  year-range views, nearest-point lookup
///             └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
