//! A small, self-contained SHA-224/SHA-256 and HMAC-SHA-224/HMAC-SHA-256
//! implementation.
//! (C) The hmac-sha2 developers, ISC license
//!
//! ```
//! use hmac_sha2::{hash, hmac, Variant};
//!
//! let digest = hash(Variant::Sha256, b"abc");
//! assert_eq!(digest.len(), 32);
//!
//! let tag = hmac(Variant::Sha224, b"Jefe", b"what do ya want for nothing?");
//! assert_eq!(tag.len(), 28);
//! ```

#![no_std]
#![allow(
    clippy::cast_lossless,
    clippy::many_single_char_names,
    clippy::unreadable_literal
)]

/// Emits a `tracing` event when the `tracing` feature is enabled.
macro_rules! event {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)*);
    };
}

mod compress;
mod consts;
mod error;
mod hash;
mod hmac;
mod traits;

pub use compress::{compress, State};
pub use consts::{BLOCK_LEN, SHA224_LEN, SHA256_LEN};
pub use error::{Error, Result};
pub use hash::{hash, HashContext, Output, Sha224, Sha256, Variant};
pub use hmac::{hmac, HmacContext, HmacSha224, HmacSha256};
#[cfg(feature = "traits010")]
pub use traits::{WrappedSha224, WrappedSha256};
