//! Who moves first.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One of the two chairs at the table, in the order players were passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// First player handed to the game.
    A,
    /// Second player handed to the game.
    B,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

/// Picks the seat that opens the game.
pub trait TurnOrder {
    /// Returns the seat of the first mover.
    fn first(&mut self) -> Seat;

    /// True if the choice was left to chance.
    fn is_random(&self) -> bool {
        false
    }
}

/// Fair coin toss over an arbitrary random source.
#[derive(Debug, Clone)]
pub struct RandomTurnOrder<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomTurnOrder<R> {
    /// Wraps a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTurnOrder<StdRng> {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible toss sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TurnOrder for RandomTurnOrder<R> {
    #[instrument(skip(self))]
    fn first(&mut self) -> Seat {
        let seat = if self.rng.gen_bool(0.5) { Seat::A } else { Seat::B };
        debug!(?seat, "Tossed for first move");
        seat
    }

    fn is_random(&self) -> bool {
        true
    }
}

/// Always hands the first move to the same seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTurnOrder(pub Seat);

impl TurnOrder for FixedTurnOrder {
    fn first(&mut self) -> Seat {
        self.0
    }
}

impl<T: TurnOrder + ?Sized> TurnOrder for &mut T {
    fn first(&mut self) -> Seat {
        (**self).first()
    }

    fn is_random(&self) -> bool {
        (**self).is_random()
    }
}

impl<T: TurnOrder + ?Sized> TurnOrder for Box<T> {
    fn first(&mut self) -> Seat {
        (**self).first()
    }

    fn is_random(&self) -> bool {
        (**self).is_random()
    }
}
