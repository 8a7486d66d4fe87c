//! Borrowed read-only view of a run, for rendering and replay checks.

use forage_agent::{Agent, ForagingState};
use forage_core::{Coord, TickId};
use forage_field::Field;
use indexmap::IndexMap;

use crate::hash::{fnv1a_u32, fnv1a_u64, pheromone_hash};

/// State of a run at the end of a tick.
///
/// Borrows from the [`Run`](crate::Run), so the run cannot advance while a
/// snapshot is alive.
#[derive(Debug, Clone, Copy)]
pub struct RunSnapshot<'a> {
    tick: TickId,
    field: &'a Field,
    agents: &'a [Agent],
}

impl<'a> RunSnapshot<'a> {
    pub(crate) fn new(tick: TickId, field: &'a Field, agents: &'a [Agent]) -> Self {
        Self {
            tick,
            field,
            agents,
        }
    }

    /// Completed ticks.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Side length of the lattice.
    pub fn size(&self) -> u32 {
        self.field.size()
    }

    /// Pheromone concentrations in rank order (`x * size + y`).
    pub fn pheromone(&self) -> &'a [f64] {
        self.field.pheromone()
    }

    /// Food sources in placement order.
    pub fn food_sources(&self) -> &'a IndexMap<Coord, u32> {
        self.field.food_sources()
    }

    /// Home cells.
    pub fn home_area(&self) -> &'a [Coord] {
        self.field.home_area()
    }

    /// Agent positions and states, in move order.
    pub fn agents(&self) -> impl Iterator<Item = (Coord, ForagingState)> + 'a {
        self.agents.iter().map(|a| (a.position(), a.state()))
    }

    /// FNV-1a over the tick, pheromone bit patterns, food values and agent
    /// positions and states.
    pub fn state_hash(&self) -> u64 {
        let mut hash = fnv1a_u64(pheromone_hash(self.pheromone()), self.tick.0);
        for (pos, &v) in self.food_sources() {
            hash = fnv1a_u32(hash, pos.x as u32);
            hash = fnv1a_u32(hash, pos.y as u32);
            hash = fnv1a_u32(hash, v);
        }
        for (pos, state) in self.agents() {
            hash = fnv1a_u32(hash, pos.x as u32);
            hash = fnv1a_u32(hash, pos.y as u32);
            hash = fnv1a_u32(hash, state as u32);
        }
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::builder()
            .size(6)
            .home_size(2)
            .build_with_food(&[(Coord::new(5, 5), 2)])
            .unwrap()
    }

    #[test]
    fn views_expose_field_and_agents() {
        let f = field();
        let agents = vec![Agent::at(Coord::new(2, 2)), Agent::at(Coord::new(3, 3))];
        let snap = RunSnapshot::new(TickId(4), &f, &agents);
        assert_eq!(snap.tick_id(), TickId(4));
        assert_eq!(snap.size(), 6);
        assert_eq!(snap.pheromone().len(), 36);
        assert_eq!(snap.home_area().len(), 4);
        assert_eq!(snap.food_sources().get(&Coord::new(5, 5)), Some(&2));
        let seen: Vec<_> = snap.agents().collect();
        assert_eq!(
            seen,
            vec![
                (Coord::new(2, 2), ForagingState::Searching),
                (Coord::new(3, 3), ForagingState::Searching)
            ]
        );
    }

    #[test]
    fn hash_tracks_every_component() {
        let mut f = field();
        let agents = vec![Agent::at(Coord::new(2, 2))];
        let base = RunSnapshot::new(TickId(0), &f, &agents).state_hash();

        assert_ne!(base, RunSnapshot::new(TickId(1), &f, &agents).state_hash());

        let moved = vec![Agent::at(Coord::new(2, 3))];
        assert_ne!(base, RunSnapshot::new(TickId(0), &f, &moved).state_hash());

        f.take_food(Coord::new(5, 5)).unwrap();
        let after_food = RunSnapshot::new(TickId(0), &f, &agents).state_hash();
        assert_ne!(base, after_food);

        f.deposit_pheromone(Coord::new(0, 0), 30.0).unwrap();
        assert_ne!(
            after_food,
            RunSnapshot::new(TickId(0), &f, &agents).state_hash()
        );
    }
}
