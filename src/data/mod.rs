/// Data layer: core types and bounded loading.
///
/// Architecture:
/// ```text
///        .csv
///          │
///          ▼
///    ┌──────────┐
///    │  loader   │  bounded read → SamplePreview
///    └──────────┘
///          │
///          ▼
///    ┌───────────────┐
///    │ SamplePreview  │  column names + first rows
///    └───────────────┘
/// ```
pub mod loader;
pub mod model;
