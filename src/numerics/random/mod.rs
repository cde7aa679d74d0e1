// src/numerics/random/mod.rs
// PCG32 pseudo-random generator plus a process-wide default instance.

pub mod configuration;

use std::sync::{Mutex, PoisonError};

use tracing::debug;

pub use configuration::{RandomConfig, DEFAULT_INC, DEFAULT_SEED};

const PCG_MULTIPLIER: u64 = 6364136223846793005;
const RANDOM_32BIT_MAX: u32 = 0xFFFF_FFFF;

/// PCG32 (XSH-RR variant, 64-bit state, 32-bit output).
///
/// Not cryptographically secure. Two generators built from the same seed and
/// increment produce the same sequence on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPcg {
    state: u64,
    inc: u64,
    current_seed: u64,
    current_inc: u64,
}

impl Default for RandomPcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, DEFAULT_INC)
    }
}

impl RandomPcg {
    pub const fn new(seed: u64, increment: u64) -> Self {
        let (state, inc) = srandom(seed, increment);
        Self {
            state,
            inc,
            current_seed: seed,
            current_inc: increment,
        }
    }

    pub fn from_config(config: &RandomConfig) -> Self {
        Self::new(config.seed, config.increment)
    }

    fn step(&mut self) -> u32 {
        let (state, output) = pcg_step(self.state, self.inc);
        self.state = state;
        output
    }

    /// Restarts the sequence from `seed` on the current stream.
    pub fn seed(&mut self, seed: u64) {
        let (state, inc) = srandom(seed, self.current_inc);
        self.state = state;
        self.inc = inc;
        self.current_seed = seed;
    }

    /// The seed the current sequence was started from.
    pub fn get_seed(&self) -> u64 {
        self.current_seed
    }

    /// The live generator state; feeding it back to [`seed`](Self::seed)
    /// does not resume the sequence, it starts a new one.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Reseeds from operating-system entropy.
    pub fn randomize(&mut self) {
        let entropy = rand::random::<u64>();
        let seed = entropy
            .wrapping_mul(self.state)
            .wrapping_add(DEFAULT_INC);
        debug!(seed, "randomized PCG generator");
        self.seed(seed);
    }

    pub fn rand(&mut self) -> u32 {
        self.step()
    }

    /// Uniform value in `[0, bound)` without modulo bias. A zero bound
    /// yields 0.
    pub fn rand_bound(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.step();
            if r >= threshold {
                return r % bound;
            }
        }
    }

    /// Uniform in `[0, 1]`.
    pub fn randd(&mut self) -> f64 {
        f64::from(self.rand()) / f64::from(RANDOM_32BIT_MAX)
    }

    /// Uniform in `[0, 1]`.
    pub fn randf(&mut self) -> f32 {
        self.rand() as f32 / RANDOM_32BIT_MAX as f32
    }

    /// Normally distributed value (Box-Muller).
    pub fn randfn(&mut self, mean: f64, deviation: f64) -> f64 {
        let angle = core::f64::consts::TAU * self.randd();
        let radius = (-2.0 * self.randd().ln()).sqrt();
        mean + deviation * angle.cos() * radius
    }

    pub fn random_f64(&mut self, from: f64, to: f64) -> f64 {
        self.randd() * (to - from) + from
    }

    pub fn random_f32(&mut self, from: f32, to: f32) -> f32 {
        self.randf() * (to - from) + from
    }

    /// Uniform integer in the inclusive range spanned by `from` and `to`,
    /// in either order.
    pub fn random_range_i32(&mut self, from: i32, to: i32) -> i32 {
        if from == to {
            return from;
        }
        let span = from.abs_diff(to).wrapping_add(1);
        let offset = if span == 0 { self.rand() } else { self.rand_bound(span) };
        from.min(to).wrapping_add(offset as i32)
    }
}

/// One PCG32 step: returns the next state and the output for the old one.
const fn pcg_step(state: u64, inc: u64) -> (u64, u32) {
    let next = state.wrapping_mul(PCG_MULTIPLIER).wrapping_add(inc);
    let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
    let rot = (state >> 59) as u32;
    (next, xorshifted.rotate_right(rot))
}

/// Initial `(state, inc)` for a seed and stream selector.
const fn srandom(initstate: u64, initseq: u64) -> (u64, u64) {
    let inc = (initseq << 1) | 1;
    let (state, _) = pcg_step(0, inc);
    let (state, _) = pcg_step(state.wrapping_add(initstate), inc);
    (state, inc)
}

impl rand::RngCore for RandomPcg {
    fn next_u32(&mut self) -> u32 {
        self.rand()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.rand());
        let high = u64::from(self.rand());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.rand().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

static DEFAULT_RAND: Mutex<RandomPcg> = Mutex::new(RandomPcg::new(DEFAULT_SEED, DEFAULT_INC));

fn with_default<R>(f: impl FnOnce(&mut RandomPcg) -> R) -> R {
    let mut rng = DEFAULT_RAND.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut rng)
}

/// Reseeds the process-wide generator.
pub fn seed(seed: u64) {
    debug!(seed, "seeding default generator");
    with_default(|rng| rng.seed(seed));
}

pub fn randomize() {
    with_default(RandomPcg::randomize);
}

/// Replaces the process-wide generator with one built from `config`.
pub fn configure(config: &RandomConfig) {
    debug!(seed = config.seed, increment = config.increment, "configuring default generator");
    with_default(|rng| *rng = RandomPcg::from_config(config));
}

pub fn rand() -> u32 {
    with_default(RandomPcg::rand)
}

pub fn randd() -> f64 {
    with_default(RandomPcg::randd)
}

pub fn randf() -> f32 {
    with_default(RandomPcg::randf)
}

pub fn randomd(from: f64, to: f64) -> f64 {
    with_default(|rng| rng.random_f64(from, to))
}

pub fn randomf(from: f32, to: f32) -> f32 {
    with_default(|rng| rng.random_f32(from, to))
}

/// Float in the range spanned by two integers.
pub fn randomr(from: i32, to: i32) -> f32 {
    randomf(from as f32, to as f32)
}

/// One value from a throwaway generator seeded with `*seed`, which is then
/// advanced to that generator's state.
pub fn rand_from_seed(seed: &mut u64) -> u32 {
    let mut rng = RandomPcg::new(*seed, DEFAULT_INC);
    let value = rng.rand();
    *seed = rng.state();
    value
}
