/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site/category index, payload bounds
///   └──────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  (site, payload range) → pie slices / scatter indices
///   └───────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
