//! RNG module - injected randomness for tile spawning
//!
//! The board never owns a random source. Callers pass something implementing
//! [`TileRng`] into every operation that may spawn a tile, which keeps the
//! engine deterministic under test: a seeded [`SimpleRng`] always produces the
//! same sequence of spawn positions.

/// Source of uniform indices used when choosing a spawn cell.
pub trait TileRng {
    /// Return an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Zero is reserved; remap it so every session reports a usable seed.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG have short periods; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Current internal state
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileRng for SimpleRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }
}

/// Replays a fixed list of indices, wrapping around. Handy for scripting
/// spawn positions in tests and benches.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    picks: Vec<usize>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            pos: 0,
        }
    }
}

impl TileRng for ScriptedRng {
    fn next_index(&mut self, len: usize) -> usize {
        let pick = self.picks.get(self.pos).copied().unwrap_or(0);
        if !self.picks.is_empty() {
            self.pos = (self.pos + 1) % self.picks.len();
        }
        pick % len.max(1)
    }
}
