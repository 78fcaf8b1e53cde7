//! RustCrypto `digest` trait implementations for [`Sha256`] and [`Sha224`].

#[cfg(feature = "traits010")]
use crate::hash::{Sha224, Sha256};

/// Wrapped `Sha256` type for the `Digest` trait.
#[cfg(feature = "traits010")]
pub type WrappedSha256 = digest010::core_api::CoreWrapper<Sha256>;

/// Wrapped `Sha224` type for the `Digest` trait.
#[cfg(feature = "traits010")]
pub type WrappedSha224 = digest010::core_api::CoreWrapper<Sha224>;

#[cfg(feature = "traits010")]
mod digest_trait010 {
    use core::fmt;

    use digest010::{
        block_buffer::Eager,
        const_oid::{AssociatedOid, ObjectIdentifier},
        consts::{U28, U32, U64},
        core_api::{
            AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, FixedOutputCore,
            OutputSizeUser, Reset, UpdateCore,
        },
        FixedOutput, FixedOutputReset, HashMarker, Output, Update,
    };

    use crate::hash::{Sha224, Sha256};

    macro_rules! impl_digest010 {
        ($ty:ident, $size:ty, $oid:literal, $name:literal) => {
            impl AssociatedOid for $ty {
                const OID: ObjectIdentifier = ObjectIdentifier::new_unwrap($oid);
            }

            impl AlgorithmName for $ty {
                fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str($name)
                }
            }

            impl HashMarker for $ty {}

            impl BufferKindUser for $ty {
                type BufferKind = Eager;
            }

            impl BlockSizeUser for $ty {
                type BlockSize = U64;
            }

            impl OutputSizeUser for $ty {
                type OutputSize = $size;
            }

            impl UpdateCore for $ty {
                #[inline]
                fn update_blocks(&mut self, blocks: &[Block<Self>]) {
                    for block in blocks {
                        self.absorb(block);
                    }
                }
            }

            impl Update for $ty {
                #[inline]
                fn update(&mut self, data: &[u8]) {
                    self.absorb(data);
                }
            }

            impl FixedOutputCore for $ty {
                fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
                    self.absorb(buffer.get_data());
                    self.clone().finalize_into(out);
                }
            }

            impl FixedOutput for $ty {
                fn finalize_into(self, out: &mut Output<Self>) {
                    let h = self.finalize();
                    out.copy_from_slice(&h);
                }
            }

            impl Reset for $ty {
                fn reset(&mut self) {
                    *self = Self::new()
                }
            }

            impl FixedOutputReset for $ty {
                fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                    self.clone().finalize_into(out);
                    self.reset();
                }
            }
        };
    }

    impl_digest010!(Sha256, U32, "2.16.840.1.101.3.4.2.1", "Sha256");
    impl_digest010!(Sha224, U28, "2.16.840.1.101.3.4.2.4", "Sha224");
}

#[cfg(feature = "traits09")]
mod digest_trait09 {
    use digest09::consts::{U28, U32, U64};
    use digest09::{BlockInput, FixedOutputDirty, Output, Reset, Update};

    use crate::hash::{Sha224, Sha256};

    macro_rules! impl_digest09 {
        ($ty:ident, $size:ty) => {
            impl BlockInput for $ty {
                type BlockSize = U64;
            }

            impl Update for $ty {
                fn update(&mut self, input: impl AsRef<[u8]>) {
                    self.absorb(input.as_ref())
                }
            }

            impl FixedOutputDirty for $ty {
                type OutputSize = $size;

                fn finalize_into_dirty(&mut self, out: &mut Output<Self>) {
                    let h = self.clone().finalize();
                    out.copy_from_slice(&h);
                }
            }

            impl Reset for $ty {
                fn reset(&mut self) {
                    *self = Self::new()
                }
            }
        };
    }

    impl_digest09!(Sha256, U32);
    impl_digest09!(Sha224, U28);
}
