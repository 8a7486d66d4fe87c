//! Core types for the forage colony simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid coordinate type, tick and run identifiers, and the error taxonomy
//! shared by the field, agent, and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{ConfigError, FieldError};
pub use id::{Coord, RunIndex, TickId};
