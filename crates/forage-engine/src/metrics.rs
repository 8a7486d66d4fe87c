//! Per-tick counters reported by [`Run::tick`](crate::Run::tick).

use forage_core::TickId;

/// What happened during one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// The tick that just completed.
    pub tick: TickId,
    /// Food units picked up this tick.
    pub pickups: u32,
    /// Deliveries completed this tick.
    pub deliveries: u32,
    /// Pheromone cells zeroed by the detectability floor.
    pub cells_zeroed: usize,
    /// Food remaining after the tick.
    pub remaining_food: u64,
}
