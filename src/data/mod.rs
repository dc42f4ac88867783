/// Data layer: core types, loading, and the query engine.
///
/// Architecture:
/// ```text
///  seed fixture / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  customers + transactions, source order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  substring filters → indices, per-day totals
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
pub mod seed;
