//! The SHA-224/SHA-256 compression function (FIPS 180-4 §6.2.2).
//!
//! Everything here is branch-free with respect to block contents: the only
//! table lookups index the public round-constant table by round number.

use crate::consts::{load_be, store_be, BLOCK_LEN, ROUND_CONSTANTS};

/// The eight 32-bit chaining words of a hash computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State([u32; 8]);

impl State {
    pub const fn from_words(words: [u32; 8]) -> Self {
        State(words)
    }

    pub const fn words(&self) -> [u32; 8] {
        self.0
    }

    /// Big-endian serialization of every word; callers truncate.
    pub(crate) fn store(&self, out: &mut [u8; 32]) {
        for (i, &e) in self.0.iter().enumerate() {
            store_be(out, i * 4, e);
        }
    }
}

/// Sixteen-word rolling message schedule.
struct Schedule([u32; 16]);

impl Schedule {
    fn new(block: &[u8]) -> Self {
        let mut w = [0u32; 16];
        for (i, e) in w.iter_mut().enumerate() {
            *e = load_be(block, i * 4)
        }
        Schedule(w)
    }

    /// Replaces the window with the next sixteen schedule words.
    #[inline]
    fn expand(&mut self) {
        let w = &mut self.0;
        for i in 0..16 {
            w[i] = w[i]
                .wrapping_add(sigma1(w[(i + 14) & 15]))
                .wrapping_add(w[(i + 9) & 15])
                .wrapping_add(sigma0(w[(i + 1) & 15]));
        }
    }
}

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[cfg_attr(feature = "opt_size", inline(never))]
#[cfg_attr(not(feature = "opt_size"), inline(always))]
fn round(v: &mut [u32; 8], k: u32, w: u32) {
    let [a, b, c, d, e, f, g, h] = *v;
    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
    *v = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
}

fn compress_block(state: State, block: &[u8]) -> State {
    let mut w = Schedule::new(block);
    let mut v = state.0;
    for (group, rc) in ROUND_CONSTANTS.chunks_exact(16).enumerate() {
        if group != 0 {
            w.expand();
        }
        for (&k, &wi) in rc.iter().zip(w.0.iter()) {
            round(&mut v, k, wi);
        }
    }
    let mut out = state.0;
    for (o, x) in out.iter_mut().zip(v) {
        *o = o.wrapping_add(x);
    }
    State(out)
}

/// Runs one 64-byte block through the compression function and returns
/// the next chaining state.
pub fn compress(state: State, block: &[u8; BLOCK_LEN]) -> State {
    compress_block(state, block)
}

/// Absorbs every whole block of `input` into `state` and returns the number
/// of trailing bytes left unprocessed.
pub(crate) fn blocks(state: &mut State, input: &[u8]) -> usize {
    let mut chunks = input.chunks_exact(BLOCK_LEN);
    for block in &mut chunks {
        *state = compress_block(*state, block);
    }
    chunks.remainder().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SHA256_IV;

    fn padded_abc() -> [u8; BLOCK_LEN] {
        let mut block = [0u8; BLOCK_LEN];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 24;
        block
    }

    #[test]
    fn single_block_abc() {
        let next = compress(State::from_words(SHA256_IV), &padded_abc());
        assert_eq!(
            next.words(),
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad
            ]
        );
    }

    #[test]
    fn compress_leaves_input_state_untouched() {
        let start = State::from_words(SHA256_IV);
        let block = padded_abc();
        let a = compress(start, &block);
        let b = compress(start, &block);
        assert_eq!(start.words(), SHA256_IV);
        assert_eq!(a, b);
        assert_ne!(a, start);
    }

    #[test]
    fn blocks_reports_tail() {
        let mut s = State::from_words(SHA256_IV);
        let input = [0x61u8; 130];
        assert_eq!(blocks(&mut s, &input), 2);

        let mut expected = State::from_words(SHA256_IV);
        let block = [0x61u8; BLOCK_LEN];
        expected = compress(expected, &block);
        expected = compress(expected, &block);
        assert_eq!(s, expected);
    }

    #[test]
    fn blocks_ignores_short_input() {
        let mut s = State::from_words(SHA256_IV);
        assert_eq!(blocks(&mut s, &[0u8; 63]), 63);
        assert_eq!(s.words(), SHA256_IV);
    }
}
