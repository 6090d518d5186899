/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///      placement .csv
///            │
///            ▼
///      ┌──────────┐
///      │  loader   │  parse file → Dataset
///      └──────────┘
///            │
///            ▼
///      ┌──────────┐
///      │  Dataset  │  Vec<Record>, filter domains
///      └──────────┘
///            │
///            ▼
///      ┌──────────┐
///      │  filter   │  apply FilterSelection → FilteredView
///      └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
