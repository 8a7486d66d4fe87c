//! Forage: a colony foraging simulation with pheromone trails.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all forage sub-crates. For most users, adding `forage` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use forage::prelude::*;
//!
//! let config = SimConfig {
//!     size: 10,
//!     home_size: 2,
//!     agents: 4,
//!     food_sources: 2,
//!     food_value: 3,
//!     runs: 2,
//!     ..SimConfig::with_pheromone()
//! };
//! let report = run_batch(&config).unwrap();
//! assert_eq!(report.records.len(), 2);
//! assert!(report.records.iter().all(|r| r.exhausted));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `forage-core` | Coordinates, IDs, error types |
//! | [`space`] | `forage-space` | Square lattice and move sets |
//! | [`field`] | `forage-field` | Food, home area and the pheromone field |
//! | [`agent`] | `forage-agent` | Forager state machine and movement rules |
//! | [`engine`] | `forage-engine` | Runs, batches, configuration and reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, IDs and error types (`forage-core`).
pub use forage_core as types;

/// Square lattice and move sets (`forage-space`).
///
/// [`space::Grid`] owns bounds checks, rank-order indexing and the
/// centred home block; [`space::Connectivity`] picks 4- or 8-connected
/// moves.
pub use forage_space as space;

/// Food sources, home area and the pheromone field (`forage-field`).
///
/// Includes the BFS diffusion halo ([`field::Field::diffuse`]) and path
/// deposits.
pub use forage_field as field;

/// Forager state machine and movement rules (`forage-agent`).
pub use forage_agent as agent;

/// Run driver, batch runner and reports (`forage-engine`).
///
/// [`engine::Run`] for stepping one replicate, [`engine::run_batch`] for
/// many.
pub use forage_engine as engine;

/// Common imports for typical forage usage.
///
/// ```rust
/// use forage::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use forage_core::{ConfigError, Coord, FieldError, RunIndex, TickId};

    // Space
    pub use forage_space::{Connectivity, Grid};

    // Field
    pub use forage_field::{DepositPolicy, Field, PheromoneParams};

    // Agents
    pub use forage_agent::{Agent, ForagingState, MovementRules, TrailPolicy};

    // Engine
    pub use forage_engine::{
        run_batch, BatchReport, BatchSummary, Run, RunError, SimConfig, Termination,
    };
}
