/// Data layer: sample types and loading.
///
/// Architecture:
/// ```text
///   uniforms / gaussians   (one row of comma-separated floats)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  first CSV record → strict float grammar
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ SampleSet  │  Vec<f64>, source path
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
