use quickcheck::quickcheck;

use crate::order::order;
use crate::sort::{argsort, argsort_scratch_len};

fn check_sorted_and_stable(words: &[Vec<u8>], out: &[usize]) -> bool {
    if out.len() != words.len() {
        return false;
    }
    let mut seen = vec![false; words.len()];
    for &i in out {
        if i >= words.len() || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    for w in out.windows(2) {
        match order(&words[w[0]], &words[w[1]]) {
            core::cmp::Ordering::Greater => return false,
            core::cmp::Ordering::Equal if w[0] > w[1] => return false,
            _ => {}
        }
    }
    true
}

quickcheck! {
    fn qc_argsort_is_sorted_and_stable(words: Vec<Vec<u8>>) -> bool {
        let refs: Vec<&[u8]> = words.iter().map(|w| w.as_slice()).collect();
        let mut out = vec![0usize; refs.len()];
        let mut scratch = vec![0usize; argsort_scratch_len(refs.len())];
        if argsort(&refs[..], &mut out, &mut scratch).is_err() {
            return false;
        }
        check_sorted_and_stable(&words, &out)
    }
}

#[test]
fn handles_empty_sequence() {
    let words: Vec<&[u8]> = Vec::new();
    let mut out: Vec<usize> = Vec::new();
    let mut scratch: Vec<usize> = Vec::new();
    argsort(&words[..], &mut out, &mut scratch).unwrap();
    assert!(out.is_empty());
}

#[test]
fn handles_all_identical() {
    let words: Vec<&[u8]> = vec![b"same", b"same", b"same"];
    let mut out = vec![0usize; words.len()];
    let mut scratch = vec![0usize; argsort_scratch_len(words.len())];
    argsort(&words[..], &mut out, &mut scratch).unwrap();
    assert_eq!(out, vec![0, 1, 2]);
}
