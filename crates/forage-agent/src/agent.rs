//! The two-phase forager.

use crate::movement::{return_step, search_step};
use crate::rules::MovementRules;
use forage_core::{Coord, FieldError};
use forage_field::Field;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Behavioural state of an agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForagingState {
    /// Looking for food.
    #[default]
    Searching,
    /// Carrying one unit of food home.
    Returning,
}

/// What a single [`Agent::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// Moved without changing state.
    Moved,
    /// Stepped onto food and took one unit.
    PickedUp,
    /// Reached home with food and respawned on a random home cell.
    Delivered {
        /// Length of the recorded path, pickup cell included.
        path_len: usize,
    },
}

/// A single forager.
///
/// After every successful [`step`](Agent::step) the position is on the
/// lattice of the field the agent moves in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    position: Coord,
    state: ForagingState,
    path: Vec<Coord>,
    deliveries: u32,
    pickups: u32,
}

impl Agent {
    /// A searching agent on a uniformly random home cell.
    pub fn spawn<R: Rng + ?Sized>(field: &Field, rng: &mut R) -> Self {
        Self::at(field.random_home_cell(rng))
    }

    /// A searching agent at an explicit cell.
    ///
    /// The cell is not checked here. An off-lattice cell makes the first
    /// [`step`](Agent::step) fail with [`FieldError::OutOfBounds`].
    pub fn at(position: Coord) -> Self {
        Self {
            position,
            state: ForagingState::Searching,
            path: Vec::new(),
            deliveries: 0,
            pickups: 0,
        }
    }

    /// A returning agent that has just taken food at `pickup`, so its path
    /// is `[pickup]`. Like [`at`](Agent::at), the cell is checked on the
    /// first step.
    pub fn carrying(pickup: Coord) -> Self {
        Self {
            position: pickup,
            state: ForagingState::Returning,
            path: vec![pickup],
            deliveries: 0,
            pickups: 0,
        }
    }

    /// Current cell.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Current state.
    pub fn state(&self) -> ForagingState {
        self.state
    }

    /// Cells visited since the last pickup. Empty while searching.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Completed deliveries.
    pub fn deliveries(&self) -> u32 {
        self.deliveries
    }

    /// Food units picked up.
    pub fn pickups(&self) -> u32 {
        self.pickups
    }

    /// Advance one tick.
    ///
    /// Searching: take a search step; landing on food takes one unit and
    /// switches to returning with `path = [pos]`.
    ///
    /// Returning: take a return step and record it. On a home cell the path
    /// is laid once as a trail (when trails are enabled), the path is
    /// cleared and the agent respawns on a random home cell, searching.
    ///
    /// A position off the field's lattice is an error in either state; the
    /// agent is left untouched.
    pub fn step<R: Rng>(
        &mut self,
        field: &mut Field,
        rules: &MovementRules,
        rng: &mut R,
    ) -> Result<StepEvent, FieldError> {
        field.grid().check(self.position)?;
        match self.state {
            ForagingState::Searching => {
                self.position = search_step(field, self.position, rules, rng)?;
                if field.take_food(self.position)? {
                    self.state = ForagingState::Returning;
                    self.path.clear();
                    self.path.push(self.position);
                    self.pickups += 1;
                    return Ok(StepEvent::PickedUp);
                }
                Ok(StepEvent::Moved)
            }
            ForagingState::Returning => {
                self.position = return_step(field, self.position, rules.diagonal_return());
                self.path.push(self.position);
                if !field.is_home(self.position) {
                    return Ok(StepEvent::Moved);
                }
                let path_len = self.path.len();
                if rules.trail_enabled {
                    field.deposit_path(&self.path)?;
                }
                trace!(at = %self.position, path_len, "delivered");
                self.path.clear();
                self.state = ForagingState::Searching;
                self.deliveries += 1;
                self.position = field.random_home_cell(rng);
                Ok(StepEvent::Delivered { path_len })
            }
        }
    }
}
