//! Square lattice topology for forage simulations.
//!
//! A [`Grid`] is an immutable `size x size` lattice with absorbing edges:
//! moves that would leave the grid are simply not produced. The move set is
//! selected by [`Connectivity`] (four cardinal neighbours, or eight with the
//! diagonals). Every spatial query the field and the agents make flows
//! through this crate, so off-grid coordinates are caught in one place.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod error;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use connectivity::Connectivity;
pub use error::SpaceError;
pub use grid::{chebyshev, manhattan, Grid, Neighbours};
