use std::collections::HashSet;

use shufl_core::sequence;
use shufl_core::{DummyShuffler, DurstenfeldShuffler, NaiveShuffler, Shuffler};

fn sorted(items: &[String]) -> Vec<String> {
    let mut sorted = items.to_vec();
    sorted.sort();
    sorted
}

#[test]
fn test_shuffling_preserves_the_token_multiset() {
    let corpus = shufl_corpus::new();
    for input in corpus.get_inputs(None).unwrap() {
        let original = sequence::from_dasherized(&input);
        let mut shufflers: Vec<Box<dyn Shuffler>> = vec![
            Box::new(DurstenfeldShuffler::new(None)),
            Box::new(NaiveShuffler::new(None)),
            Box::new(DummyShuffler::new()),
        ];
        for shuffler in shufflers.iter_mut() {
            for _ in 0..1000 {
                let mut items = original.clone();
                shuffler.shuffle(&mut items).unwrap();
                assert_eq!(items.len(), original.len());
                assert_eq!(
                    sorted(&items),
                    sorted(&original),
                    "{} changed the token multiset of {}",
                    shuffler.name(),
                    input
                );
            }
        }
    }
}

#[test]
fn test_same_seed_produces_the_same_series() {
    let input = sequence::from_dasherized("1-2-3-4-5-6-7-8-9");
    let mut a = DurstenfeldShuffler::new(Some(99));
    let mut b = DurstenfeldShuffler::new(Some(99));
    for _ in 0..20 {
        let mut items_a = input.clone();
        let mut items_b = input.clone();
        a.shuffle(&mut items_a).unwrap();
        b.shuffle(&mut items_b).unwrap();
        assert_eq!(items_a, items_b);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let input = sequence::from_dasherized("1-2-3-4-5-6-7-8-9");
    let mut a = NaiveShuffler::new(Some(1));
    let mut b = NaiveShuffler::new(Some(2));
    let mut outputs_a = Vec::new();
    let mut outputs_b = Vec::new();
    for _ in 0..20 {
        let mut items_a = input.clone();
        let mut items_b = input.clone();
        a.shuffle(&mut items_a).unwrap();
        b.shuffle(&mut items_b).unwrap();
        outputs_a.push(sequence::to_dasherized(&items_a));
        outputs_b.push(sequence::to_dasherized(&items_b));
    }
    assert_ne!(outputs_a, outputs_b);
}

#[test]
fn test_one_instance_keeps_drawing_from_the_same_source() {
    let input = sequence::from_dasherized("1-2-3-4-5-6-7-8-9");
    let mut shuffler = DurstenfeldShuffler::new(Some(7));
    let mut outputs = HashSet::new();
    for _ in 0..10 {
        let mut items = input.clone();
        shuffler.shuffle(&mut items).unwrap();
        outputs.insert(sequence::to_dasherized(&items));
    }
    // A source reset between calls would replay the same permutation.
    assert!(outputs.len() > 1);
}

#[test]
fn test_shuffled_output_rarely_matches_the_input() {
    let input = sequence::from_dasherized("1-2-3-4-5-6-7-8-9");
    let mut shuffler = DurstenfeldShuffler::new(None);
    let mut unchanged = 0;
    for _ in 0..100 {
        let mut items = input.clone();
        shuffler.shuffle(&mut items).unwrap();
        if items == input {
            unchanged += 1;
        }
    }
    // The identity permutation has probability 1/9! per trial.
    assert!(unchanged <= 2);
}

#[test]
fn test_long_sequence_single_shot_differs() {
    let tokens: Vec<String> = (1..=52).map(|n| n.to_string()).collect();
    let mut items = tokens.clone();
    let mut shuffler = DurstenfeldShuffler::create(None);
    shuffler.shuffle(&mut items).unwrap();
    assert_ne!(items, tokens);
    assert_eq!(sorted(&items), sorted(&tokens));
}

#[test]
fn test_degenerate_lengths_shuffle_to_themselves() {
    let mut empty: Vec<String> = Vec::new();
    DurstenfeldShuffler::new(None).shuffle(&mut empty).unwrap();
    assert!(empty.is_empty());

    let mut single = vec!["solo".to_string()];
    NaiveShuffler::new(Some(3)).shuffle(&mut single).unwrap();
    assert_eq!(single, vec!["solo".to_string()]);
}

#[test]
fn test_dummy_never_reorders() {
    let input = sequence::from_dasherized("A-B-C-D");
    let mut shuffler = DummyShuffler::new();
    for _ in 0..10 {
        let mut items = input.clone();
        shuffler.shuffle(&mut items).unwrap();
        assert_eq!(items, input);
    }
}
