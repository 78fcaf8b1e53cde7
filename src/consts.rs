//! Fixed tables shared by every context: initial hash values, round
//! constants and big-endian word helpers.

/// Compression block size, in bytes.
pub const BLOCK_LEN: usize = 64;

/// SHA-256 digest size, in bytes.
pub const SHA256_LEN: usize = 32;

/// SHA-224 digest size, in bytes.
pub const SHA224_LEN: usize = 28;

/// Offset of the 64-bit length field inside the final padded block.
pub(crate) const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// FIPS 180-4 §5.3.3
pub(crate) const SHA256_IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// FIPS 180-4 §5.3.2
pub(crate) const SHA224_IV: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

/// FIPS 180-4 §4.2.2, shared by SHA-224 and SHA-256.
pub(crate) const ROUND_CONSTANTS: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[inline(always)]
pub(crate) fn load_be(base: &[u8], offset: usize) -> u32 {
    let addr = &base[offset..];
    (addr[3] as u32) | (addr[2] as u32) << 8 | (addr[1] as u32) << 16 | (addr[0] as u32) << 24
}

#[inline(always)]
pub(crate) fn store_be(base: &mut [u8], offset: usize, x: u32) {
    let addr = &mut base[offset..];
    addr[3] = x as u8;
    addr[2] = (x >> 8) as u8;
    addr[1] = (x >> 16) as u8;
    addr[0] = (x >> 24) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_helpers_agree_with_core() {
        let bytes = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x02, 0x03, 0x04];
        assert_eq!(load_be(&bytes, 0), 0xdeadbeef);
        assert_eq!(load_be(&bytes, 4), u32::from_be_bytes([1, 2, 3, 4]));

        let mut out = [0u8; 8];
        store_be(&mut out, 4, 0x0a0b0c0d);
        assert_eq!(out, [0, 0, 0, 0, 0x0a, 0x0b, 0x0c, 0x0d]);
    }

    #[test]
    fn initial_values_differ() {
        assert_ne!(SHA224_IV, SHA256_IV);
    }
}
