/// Data layer: recruitment model and loading.
///
/// Architecture:
/// ```text
///      cdc.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Company>, read-only snapshot
///   └──────────┘
///        │
///        ▼
///   analytics::{ranking, category, sector}
/// ```

pub mod loader;
pub mod model;
