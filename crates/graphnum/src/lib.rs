//! Numeric and combinatorial helpers that sit next to the graph library.
//!
//! Modules
//! - `window`: sliding-window (running) mean.
//! - `sample`: sequential random sampling of increasing integer sequences.
//! - `geom2`: planar convex hull by monotone chain.
//! - `vertex_types`: vertex-type argument resolution over a narrow attribute trait.
//!
//! API Policy
//! - `api` is the curated flat surface; the module paths stay usable for callers
//!   that want the config structs or lower-level entry points.
//! - Every function is pure apart from the RNG it is handed; inputs are validated
//!   up front and failures surface as `Error`.

pub mod api;
pub mod error;
pub mod geom2;
pub mod sample;
pub mod vertex_types;
pub mod window;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom2::{convex_hull, convex_hull_cfg, convex_hull_xy, Hull, HullCfg};
    pub use crate::sample::{
        sample_sequence, sample_sequence_cfg, sample_sequence_with_rng, SampleCfg, SampleSeed,
    };
    pub use crate::vertex_types::{
        resolve_vertex_types, TypeValue, VertexAttributes, VertexTypeTable,
    };
    pub use crate::window::{running_mean, running_mean_cfg, MeanMethod, WindowCfg};
    pub use nalgebra::Vector2 as Vec2;
}
