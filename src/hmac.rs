//! HMAC over SHA-224/SHA-256 (RFC 2104, FIPS 198-1).

use subtle::ConstantTimeEq;

use crate::consts::{BLOCK_LEN, SHA224_LEN, SHA256_LEN};
use crate::hash::{hash, HashContext, Output, Variant};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Keys longer than a block are replaced by their digest, then every key is
/// zero-extended to a full block.
fn key_block(variant: Variant, k: &[u8]) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    if k.len() > BLOCK_LEN {
        event!(trace, key_len = k.len(), "hashing oversized HMAC key");
        let hk = hash(variant, k);
        block[..hk.len()].copy_from_slice(&hk);
    } else {
        block[..k.len()].copy_from_slice(k);
    }
    block
}

/// Incremental HMAC for either variant.
///
/// Both hash contexts are keyed at construction, so the key is not retained
/// past `new`. Message bytes only ever reach the inner context.
#[derive(Clone)]
pub struct HmacContext {
    inner: HashContext,
    outer: HashContext,
}

impl HmacContext {
    pub fn new(variant: Variant, k: impl AsRef<[u8]>) -> HmacContext {
        let mut padded = key_block(variant, k.as_ref());
        for p in padded.iter_mut() {
            *p ^= IPAD;
        }
        let mut inner = HashContext::new(variant);
        inner.update(padded);

        for p in padded.iter_mut() {
            *p ^= IPAD ^ OPAD;
        }
        let mut outer = HashContext::new(variant);
        outer.update(padded);
        HmacContext { inner, outer }
    }

    pub fn variant(&self) -> Variant {
        self.inner.variant()
    }

    /// Absorb content
    pub fn update(&mut self, input: impl AsRef<[u8]>) {
        self.inner.update(input);
    }

    /// Compute the tag over the entire input
    pub fn finalize(self) -> Output {
        let HmacContext { inner, mut outer } = self;
        outer.update(inner.finalize());
        outer.finalize()
    }

    /// Compares the computed tag with `tag` in constant time. A tag of the
    /// wrong length never matches.
    pub fn verify(self, tag: &[u8]) -> bool {
        self.finalize().as_bytes().ct_eq(tag).into()
    }
}

/// Compute the `variant` HMAC of `message` under `key`.
pub fn hmac(variant: Variant, key: impl AsRef<[u8]>, message: impl AsRef<[u8]>) -> Output {
    let mut h = HmacContext::new(variant, key);
    h.update(message);
    h.finalize()
}

/// HMAC-SHA256 with a fixed-size tag.
#[derive(Clone)]
pub struct HmacSha256(HmacContext);

impl HmacSha256 {
    /// Compute HMAC-SHA256(`input`, `k`)
    pub fn mac(input: impl AsRef<[u8]>, k: impl AsRef<[u8]>) -> [u8; SHA256_LEN] {
        let mut h = HmacSha256::new(k);
        h.update(input);
        h.finalize()
    }

    pub fn new(k: impl AsRef<[u8]>) -> HmacSha256 {
        HmacSha256(HmacContext::new(Variant::Sha256, k))
    }

    /// Absorb content
    pub fn update(&mut self, input: impl AsRef<[u8]>) {
        self.0.update(input);
    }

    /// Compute HMAC-SHA256 over the entire input
    pub fn finalize(self) -> [u8; SHA256_LEN] {
        let mut tag = [0u8; SHA256_LEN];
        tag.copy_from_slice(&self.0.finalize());
        tag
    }

    pub fn verify(self, tag: &[u8]) -> bool {
        self.0.verify(tag)
    }
}

/// HMAC-SHA224 with a fixed-size tag.
#[derive(Clone)]
pub struct HmacSha224(HmacContext);

impl HmacSha224 {
    /// Compute HMAC-SHA224(`input`, `k`)
    pub fn mac(input: impl AsRef<[u8]>, k: impl AsRef<[u8]>) -> [u8; SHA224_LEN] {
        let mut h = HmacSha224::new(k);
        h.update(input);
        h.finalize()
    }

    pub fn new(k: impl AsRef<[u8]>) -> HmacSha224 {
        HmacSha224(HmacContext::new(Variant::Sha224, k))
    }

    /// Absorb content
    pub fn update(&mut self, input: impl AsRef<[u8]>) {
        self.0.update(input);
    }

    /// Compute HMAC-SHA224 over the entire input
    pub fn finalize(self) -> [u8; SHA224_LEN] {
        let mut tag = [0u8; SHA224_LEN];
        tag.copy_from_slice(&self.0.finalize());
        tag
    }

    pub fn verify(self, tag: &[u8]) -> bool {
        self.0.verify(tag)
    }
}
