use proptest::prelude::*;

use crate::align::{align_scratch_len, needleman_wunsch, smith_waterman, uniform_matrix};

proptest! {
    #[test]
    fn nw_identical_sequences_score_only_matches(
        a in prop::collection::vec(any::<u8>(), 1..20),
    ) {
        let matrix = uniform_matrix(3, -2);
        let mut scratch = vec![0i64; align_scratch_len(a.len(), a.len())];
        let score = needleman_wunsch(&a, &a, &matrix, 5, 2, &mut scratch).unwrap();
        prop_assert_eq!(score, 3 * a.len() as i64);
    }

    #[test]
    fn sw_score_never_negative(
        a in prop::collection::vec(any::<u8>(), 0..20),
        b in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        let matrix = uniform_matrix(1, -10);
        let mut scratch = vec![0i64; align_scratch_len(a.len(), b.len())];
        let score = smith_waterman(&a, &b, &matrix, 3, 1, &mut scratch).unwrap();
        prop_assert!(score >= 0);
    }

    #[test]
    fn sw_never_exceeds_nw_for_same_inputs(
        a in prop::collection::vec(any::<u8>(), 0..20),
        b in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        let matrix = uniform_matrix(2, -3);
        let mut s1 = vec![0i64; align_scratch_len(a.len(), b.len())];
        let mut s2 = vec![0i64; align_scratch_len(a.len(), b.len())];
        let nw = needleman_wunsch(&a, &b, &matrix, 4, 2, &mut s1).unwrap();
        let sw = smith_waterman(&a, &b, &matrix, 4, 2, &mut s2).unwrap();
        prop_assert!(sw >= nw);
    }
}
