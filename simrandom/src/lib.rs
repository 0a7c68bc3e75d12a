//! xoshiro256++ PRNG for deterministic hand simulation.
//!
//! Reference: https://prng.di.unimi.it/
//! This is the recommended general-purpose PRNG from Vigna & Blackman.
//! Period: 2^256 - 1, passes BigCrush and PractRand.
//!
//! The simulator owns exactly one generator per logical thread of control:
//! the sequential benchmark loop seeds one instance and reuses it for every
//! draw, while the parallel mode derives one seed per hand from a master
//! instance and gives each worker its own generator.

/// Captured state of a generator, allowing exact reproduction of the
/// sequence from the point of capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xoshiro256PlusPlusState {
    s: [u64; 4],
}

/// Fast, high-quality PRNG using the xoshiro256++ algorithm.
#[derive(Clone, Debug)]
pub struct Xoshiro256PlusPlus {
    s: [u64; 4],
}

/// Expand a u64 seed into full generator state with SplitMix64,
/// as recommended by the xoshiro authors.
fn splitmix64_expand(seed: u64) -> [u64; 4] {
    let mut z = seed;
    let mut state = [0u64; 4];
    for s in &mut state {
        z = z.wrapping_add(0x9e3779b97f4a7c15);
        let mut x = z;
        x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
        *s = x ^ (x >> 31);
    }
    state
}

impl Xoshiro256PlusPlus {
    /// Create a new generator seeded from a u64.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            s: splitmix64_expand(seed),
        }
    }

    /// Generate the next u64 value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a random u32 (uses upper bits of u64 for better quality).
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a random index in range [0, n) using rejection sampling.
    /// This avoids modulo bias.
    #[inline]
    pub fn next_index(&mut self, n: u32) -> u32 {
        // Fast path for powers of 2
        if n.is_power_of_two() {
            return self.next_u32() & (n - 1);
        }

        // Lemire's nearly divisionless method
        let mut x = self.next_u32();
        let mut m = (x as u64) * (n as u64);
        let mut l = m as u32;

        if l < n {
            let t = n.wrapping_neg() % n;
            while l < t {
                x = self.next_u32();
                m = (x as u64) * (n as u64);
                l = m as u32;
            }
        }

        (m >> 32) as u32
    }

    /// Capture the current state for later restoration.
    pub fn capture_state(&self) -> Xoshiro256PlusPlusState {
        Xoshiro256PlusPlusState { s: self.s }
    }

    /// Create from captured state.
    pub fn from_state(state: Xoshiro256PlusPlusState) -> Self {
        Self { s: state.s }
    }

    /// Jump function: advances the state by 2^128 calls.
    /// Useful for generating non-overlapping subsequences for parallel workers.
    pub fn jump(&mut self) {
        const JUMP: [u64; 4] = [
            0x180ec6d33cfd0aba,
            0xd5a61266f0c9392c,
            0xa9582618e03fc9aa,
            0x39abdc4529b1661c,
        ];

        let mut s0 = 0u64;
        let mut s1 = 0u64;
        let mut s2 = 0u64;
        let mut s3 = 0u64;

        for &jump_val in &JUMP {
            for b in 0..64 {
                if (jump_val >> b) & 1 != 0 {
                    s0 ^= self.s[0];
                    s1 ^= self.s[1];
                    s2 ^= self.s[2];
                    s3 ^= self.s[3];
                }
                self.next_u64();
            }
        }

        self.s[0] = s0;
        self.s[1] = s1;
        self.s[2] = s2;
        self.s[3] = s3;
    }
}
