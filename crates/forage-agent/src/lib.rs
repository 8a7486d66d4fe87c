//! Foraging agents.
//!
//! An [`Agent`] alternates between two states. While
//! [`Searching`](ForagingState::Searching) it walks at random, or follows
//! the pheromone gradient once the trail under it is detectable; stepping
//! onto food picks up one unit. While [`Returning`](ForagingState::Returning)
//! it heads for the nearest home cell, recording its path, and on arrival
//! lays that path as a trail and respawns on a random home cell.
//!
//! How a trail is followed is a [`TrailFollowing`] strategy selected by
//! [`TrailPolicy`]. Every movement decision lives in [`movement`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod movement;
pub mod rules;
pub mod trail;

pub use agent::{Agent, ForagingState, StepEvent};
pub use rules::MovementRules;
pub use trail::{Greedy, Proportional, TrailFollowing, TrailPolicy};
