//! Streaming SHA-224/SHA-256.

use core::fmt;
use core::str::FromStr;

use crate::compress::{blocks, State};
use crate::consts::{BLOCK_LEN, LENGTH_OFFSET, SHA224_IV, SHA224_LEN, SHA256_IV, SHA256_LEN};
use crate::error::{Error, Result};

/// Which member of the SHA-256 family a context computes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Sha224,
    Sha256,
}

impl Variant {
    /// Digest size in bytes: 28 or 32.
    pub const fn digest_len(self) -> usize {
        match self {
            Variant::Sha224 => SHA224_LEN,
            Variant::Sha256 => SHA256_LEN,
        }
    }

    pub const fn initial_state(self) -> State {
        match self {
            Variant::Sha224 => State::from_words(SHA224_IV),
            Variant::Sha256 => State::from_words(SHA256_IV),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Sha224 => "SHA-224",
            Variant::Sha256 => "SHA-256",
        }
    }

    /// Maps an output size in bits (224 or 256) to a variant.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            224 => Ok(Variant::Sha224),
            256 => Ok(Variant::Sha256),
            _ => {
                event!(debug, bits, "rejected hash variant tag");
                Err(Error::ContractViolation("unknown hash variant"))
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for Variant {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        Variant::from_bits(bits)
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let is = |a: &str, b: &str| s.eq_ignore_ascii_case(a) || s.eq_ignore_ascii_case(b);
        if is("sha224", "sha-224") {
            Ok(Variant::Sha224)
        } else if is("sha256", "sha-256") {
            Ok(Variant::Sha256)
        } else {
            event!(debug, tag = s, "rejected hash variant name");
            Err(Error::ContractViolation("unknown hash variant"))
        }
    }
}

/// A digest or authentication tag: 28 bytes for SHA-224, 32 for SHA-256.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Output {
    bytes: [u8; SHA256_LEN],
    variant: Variant,
}

impl Output {
    pub(crate) fn from_state(variant: Variant, state: &State) -> Self {
        let mut bytes = [0u8; SHA256_LEN];
        state.store(&mut bytes);
        bytes[variant.digest_len()..].fill(0);
        Output { bytes, variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.variant.digest_len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.variant.digest_len()]
    }
}

impl core::ops::Deref for Output {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::LowerHex for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.as_bytes() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:x})", self.variant, self)
    }
}

impl TryFrom<Output> for [u8; SHA256_LEN] {
    type Error = Error;

    fn try_from(out: Output) -> Result<Self> {
        match out.variant {
            Variant::Sha256 => Ok(out.bytes),
            Variant::Sha224 => Err(Error::ContractViolation("SHA-224 output is 28 bytes")),
        }
    }
}

impl TryFrom<Output> for [u8; SHA224_LEN] {
    type Error = Error;

    fn try_from(out: Output) -> Result<Self> {
        match out.variant {
            Variant::Sha224 => {
                let mut d = [0u8; SHA224_LEN];
                d.copy_from_slice(out.as_bytes());
                Ok(d)
            }
            Variant::Sha256 => Err(Error::ContractViolation("SHA-256 output is 32 bytes")),
        }
    }
}

/// Incremental hash computation for either variant.
///
/// Input is buffered until a full block is available, so any split of a
/// message across `update` calls yields the same digest. `finalize` takes
/// the context by value: a context produces exactly one digest.
#[derive(Clone)]
pub struct HashContext {
    state: State,
    w: [u8; BLOCK_LEN],
    r: usize,
    bits: u64,
    variant: Variant,
}

impl HashContext {
    pub fn new(variant: Variant) -> HashContext {
        HashContext {
            state: variant.initial_state(),
            w: [0u8; BLOCK_LEN],
            r: 0,
            bits: 0,
            variant,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub(crate) fn absorb(&mut self, input: &[u8]) {
        let mut n = input.len();
        // Lengths past 2^64 bits wrap, as the padding format cannot encode them.
        self.bits = self.bits.wrapping_add((n as u64).wrapping_mul(8));
        let av = BLOCK_LEN - self.r;
        let tc = ::core::cmp::min(n, av);
        self.w[self.r..self.r + tc].copy_from_slice(&input[..tc]);
        self.r += tc;
        n -= tc;
        if self.r == BLOCK_LEN {
            blocks(&mut self.state, &self.w);
            self.r = 0;
        }
        if self.r == 0 && n > 0 {
            let rb = blocks(&mut self.state, &input[tc..]);
            if rb > 0 {
                self.w[..rb].copy_from_slice(&input[input.len() - rb..]);
                self.r = rb;
            }
        }
    }

    /// Absorb content
    pub fn update(&mut self, input: impl AsRef<[u8]>) {
        self.absorb(input.as_ref())
    }

    /// Pads the buffered tail and returns the full eight-word state, before
    /// any truncation. For SHA-224 the digest is the first seven words.
    pub fn finalize_state(mut self) -> State {
        let mut padded = [0u8; 2 * BLOCK_LEN];
        padded[..self.r].copy_from_slice(&self.w[..self.r]);
        padded[self.r] = 0x80;
        let r = if self.r < LENGTH_OFFSET {
            BLOCK_LEN
        } else {
            2 * BLOCK_LEN
        };
        padded[r - 8..r].copy_from_slice(&self.bits.to_be_bytes());
        blocks(&mut self.state, &padded[..r]);
        self.state
    }

    /// Compute the digest of everything absorbed so far
    pub fn finalize(self) -> Output {
        let variant = self.variant;
        Output::from_state(variant, &self.finalize_state())
    }
}

/// Compute the `variant` digest of `input`.
pub fn hash(variant: Variant, input: impl AsRef<[u8]>) -> Output {
    let mut h = HashContext::new(variant);
    h.update(input);
    h.finalize()
}

/// Streaming SHA-256 with a fixed-size result.
#[derive(Clone)]
pub struct Sha256(HashContext);

impl Sha256 {
    pub fn new() -> Sha256 {
        Sha256(HashContext::new(Variant::Sha256))
    }

    pub(crate) fn absorb(&mut self, input: &[u8]) {
        self.0.absorb(input)
    }

    /// Absorb content
    pub fn update(&mut self, input: impl AsRef<[u8]>) {
        self.absorb(input.as_ref())
    }

    /// Compute SHA256(absorbed content)
    pub fn finalize(self) -> [u8; SHA256_LEN] {
        let mut out = [0u8; SHA256_LEN];
        self.0.finalize_state().store(&mut out);
        out
    }

    /// Compute SHA256(`input`)
    pub fn hash(input: &[u8]) -> [u8; SHA256_LEN] {
        let mut h = Sha256::new();
        h.update(input);
        h.finalize()
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Streaming SHA-224 with a fixed-size result.
#[derive(Clone)]
pub struct Sha224(HashContext);

impl Sha224 {
    pub fn new() -> Sha224 {
        Sha224(HashContext::new(Variant::Sha224))
    }

    pub(crate) fn absorb(&mut self, input: &[u8]) {
        self.0.absorb(input)
    }

    /// Absorb content
    pub fn update(&mut self, input: impl AsRef<[u8]>) {
        self.absorb(input.as_ref())
    }

    /// Compute SHA224(absorbed content): the first seven state words.
    pub fn finalize(self) -> [u8; SHA224_LEN] {
        let mut full = [0u8; SHA256_LEN];
        self.0.finalize_state().store(&mut full);
        let mut out = [0u8; SHA224_LEN];
        out.copy_from_slice(&full[..SHA224_LEN]);
        out
    }

    /// Compute SHA224(`input`)
    pub fn hash(input: &[u8]) -> [u8; SHA224_LEN] {
        let mut h = Sha224::new();
        h.update(input);
        h.finalize()
    }
}

impl Default for Sha224 {
    fn default() -> Self {
        Self::new()
    }
}
