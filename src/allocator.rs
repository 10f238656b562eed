use rand::{Rng, RngCore};

// hands out indices of a pool without repeating one until the range is
// used up, then starts over. plain rng is enough, nothing here is secret.
#[derive(Debug, Default, Clone)]
pub struct UniqueIndexDrawer {
    remaining: Vec<usize>,
    range: usize,
}

impl UniqueIndexDrawer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Removes and returns a random index in `[0, pool_size)`.
    ///
    /// Refills on the first call, once every index was handed out, or when
    /// the pool size changed since the last refill. `pool_size` must be > 0.
    pub fn draw(&mut self, pool_size: usize, rng: &mut dyn RngCore) -> usize {
        assert!(pool_size > 0, "drawing from an empty pool");
        if self.remaining.is_empty() || self.range != pool_size {
            self.remaining = (0..pool_size).collect();
            self.range = pool_size;
        }
        let at = rng.gen_range(0..self.remaining.len());
        self.remaining.swap_remove(at)
    }

    pub fn reset(&mut self) {
        self.remaining.clear();
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

/// Takes a random free slot out of the round's position pool.
///
/// Round setup guarantees there are at least as many slots as items, so an
/// empty pool here is a bug in the caller.
pub fn place_item<T>(positions: &mut Vec<T>, rng: &mut dyn RngCore) -> T {
    assert!(!positions.is_empty(), "no free position left to place an item");
    let at = rng.gen_range(0..positions.len());
    positions.swap_remove(at)
}
