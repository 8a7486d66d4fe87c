//! The shared environment of a forage run.
//!
//! A [`Field`] owns the lattice, the home block, the food sources and a dense
//! pheromone array. Agents read and mutate it one at a time through `&mut`;
//! the run driver calls [`Field::evaporate`] once per tick after every agent
//! has moved.
//!
//! Pheromone writes follow a [`DepositPolicy`]: max-combine or saturating
//! addition, both capped by the optional ceiling in [`PheromoneParams`].
//! Trail deposition along a delivered path and its halving halo live in
//! [`diffusion`].
//!
//! # Construction
//!
//! ```
//! use forage_core::Coord;
//! use forage_field::{DepositPolicy, Field};
//!
//! let field = Field::builder()
//!     .size(6)
//!     .home_size(2)
//!     .deposit_policy(DepositPolicy::MaxCombine)
//!     .build_with_food(&[(Coord::new(5, 5), 1)])
//!     .unwrap();
//!
//! assert_eq!(field.total_food(), 1);
//! assert!(field.is_home(Coord::new(2, 3)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diffusion;
pub mod field;
pub mod params;

pub use diffusion::{DiffusionReport, PathDeposit};
pub use field::{Field, FieldBuilder};
pub use params::{DepositPolicy, PheromoneParams};
