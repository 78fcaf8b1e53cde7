use hmac_sha2::{hash, hmac, HashContext, HmacContext, Sha224, Sha256, Variant};
use proptest::prelude::*;

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Sha224), Just(Variant::Sha256)]
}

proptest! {
    #[test]
    fn digest_length_follows_variant(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(hash(Variant::Sha256, &data).len(), 32);
        prop_assert_eq!(hash(Variant::Sha224, &data).len(), 28);
    }

    #[test]
    fn hashing_is_deterministic(v in variant(), data in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(hash(v, &data), hash(v, &data));
    }

    #[test]
    fn streaming_matches_one_shot(v in variant(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let expected = hash(v, &data);

        let mut h = HashContext::new(v);
        let mut i = 0usize;
        while i < data.len() {
            let step = (data[i] as usize % 97) + 1;
            let end = core::cmp::min(data.len(), i + step);
            h.update(&data[i..end]);
            i = end;
        }

        prop_assert_eq!(h.finalize(), expected);
    }

    #[test]
    fn chunk_size_does_not_matter(data in proptest::collection::vec(any::<u8>(), 0..=1024), chunk in 1usize..=257) {
        let mut a = Sha256::new();
        let mut b = Sha224::new();
        for part in data.chunks(chunk) {
            a.update(part);
            b.update(part);
        }
        prop_assert_eq!(a.finalize(), Sha256::hash(&data));
        prop_assert_eq!(b.finalize(), Sha224::hash(&data));
    }

    #[test]
    fn sha224_is_prefix_of_full_state(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut h = HashContext::new(Variant::Sha224);
        h.update(&data);
        let full: Vec<u8> = h.finalize_state().words().iter().flat_map(|w| w.to_be_bytes()).collect();
        let digest = Sha224::hash(&data);
        prop_assert_eq!(full.len(), 32);
        prop_assert_eq!(&full[..28], &digest[..]);
    }

    #[test]
    fn typed_and_dynamic_agree(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let (typed, dynamic) = (Sha256::hash(&data), hash(Variant::Sha256, &data));
        prop_assert_eq!(&typed[..], dynamic.as_bytes());
        let (typed, dynamic) = (Sha224::hash(&data), hash(Variant::Sha224, &data));
        prop_assert_eq!(&typed[..], dynamic.as_bytes());
    }

    #[test]
    fn variants_never_collide(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let long = hash(Variant::Sha256, &data);
        let short = hash(Variant::Sha224, &data);
        prop_assert_ne!(&long[..28], &short[..]);
    }

    #[test]
    fn hmac_streaming_matches_one_shot(
        v in variant(),
        key in proptest::collection::vec(any::<u8>(), 0..200),
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        chunk in 1usize..=129,
    ) {
        let mut h = HmacContext::new(v, &key);
        for part in data.chunks(chunk) {
            h.update(part);
        }
        prop_assert_eq!(h.finalize(), hmac(v, &key, &data));
    }

    #[test]
    fn hmac_zero_padding_is_transparent(
        v in variant(),
        key in proptest::collection::vec(any::<u8>(), 0..=64),
        data in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut padded = key.clone();
        padded.resize(64, 0);
        prop_assert_eq!(hmac(v, &key, &data), hmac(v, &padded, &data));
    }

    #[test]
    fn hmac_verify_accepts_own_tag(
        v in variant(),
        key in proptest::collection::vec(any::<u8>(), 0..200),
        data in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let tag = hmac(v, &key, &data);
        let mut h = HmacContext::new(v, &key);
        h.update(&data);
        prop_assert!(h.verify(&tag));
    }
}
