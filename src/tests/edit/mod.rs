use proptest::prelude::*;

use crate::edit::{levenshtein_bytes, levenshtein_scratch_len};
use crate::error::Bounded;

proptest! {
    #[test]
    fn symmetric_unit_cost(a in prop::collection::vec(any::<u8>(), 0..40),
                            b in prop::collection::vec(any::<u8>(), 0..40)) {
        let mut s1 = vec![0u64; levenshtein_scratch_len(a.len(), b.len())];
        let mut s2 = vec![0u64; levenshtein_scratch_len(a.len(), b.len())];
        let d1 = levenshtein_bytes(&a, &b, 1, 1, None, &mut s1).unwrap();
        let d2 = levenshtein_bytes(&b, &a, 1, 1, None, &mut s2).unwrap();
        prop_assert_eq!(d1, d2);
    }

    #[test]
    fn zero_iff_identical(a in prop::collection::vec(any::<u8>(), 0..40)) {
        let mut scratch = vec![0u64; levenshtein_scratch_len(a.len(), a.len())];
        let d = levenshtein_bytes(&a, &a, 1, 1, None, &mut scratch).unwrap();
        prop_assert_eq!(d, Bounded::Exact(0));
    }

    #[test]
    fn triangle_inequality(a in prop::collection::vec(any::<u8>(), 0..20),
                           b in prop::collection::vec(any::<u8>(), 0..20),
                           c in prop::collection::vec(any::<u8>(), 0..20)) {
        let mut s_ab = vec![0u64; levenshtein_scratch_len(a.len(), b.len())];
        let mut s_bc = vec![0u64; levenshtein_scratch_len(b.len(), c.len())];
        let mut s_ac = vec![0u64; levenshtein_scratch_len(a.len(), c.len())];
        let d_ab = levenshtein_bytes(&a, &b, 1, 1, None, &mut s_ab).unwrap().into_inner();
        let d_bc = levenshtein_bytes(&b, &c, 1, 1, None, &mut s_bc).unwrap().into_inner();
        let d_ac = levenshtein_bytes(&a, &c, 1, 1, None, &mut s_ac).unwrap().into_inner();
        prop_assert!(d_ac <= d_ab + d_bc);
    }

    #[test]
    fn bounded_matches_exact_when_bound_not_exceeded(
        a in prop::collection::vec(any::<u8>(), 0..20),
        b in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        let mut s1 = vec![0u64; levenshtein_scratch_len(a.len(), b.len())];
        let mut s2 = vec![0u64; levenshtein_scratch_len(a.len(), b.len())];
        let exact = levenshtein_bytes(&a, &b, 1, 1, None, &mut s1).unwrap().into_inner();
        let bounded = levenshtein_bytes(&a, &b, 1, 1, Some(exact), &mut s2).unwrap();
        prop_assert_eq!(bounded, Bounded::Exact(exact));
    }
}
