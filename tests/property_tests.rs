use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seqsample::{random_sample_with_rng, sample_indices, SelectionSampler, SequentialSampler};

fn n_and_total(max_total: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..max_total).prop_flat_map(|total| (0..=total, Just(total)))
}

proptest! {
    #[test]
    fn prop_sample_is_sorted_distinct_and_in_range(
        (n, total) in n_and_total(300),
        seed in any::<u64>(),
    ) {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let picked = sample_indices(total, n, rng).expect("valid size");

        prop_assert_eq!(picked.len(), n);
        prop_assert!(picked.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(picked.iter().all(|&i| i < total));
    }

    #[test]
    fn prop_oversized_sample_rejected(
        total in 0usize..100,
        extra in 1usize..100,
        seed in any::<u64>(),
    ) {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        prop_assert!(sample_indices(total, total + extra, rng).is_err());
    }

    #[test]
    fn prop_full_sample_is_identity(total in 0usize..200, seed in any::<u64>()) {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let picked = sample_indices(total, total, rng).expect("valid size");
        prop_assert_eq!(picked, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn prop_items_follow_their_indices(
        items in prop::collection::vec(any::<u32>(), 0..200),
        frac in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let n = (items.len() as f64 * frac).floor() as usize;
        let by_item: Vec<u32> =
            random_sample_with_rng(items.iter().copied(), n, ChaCha8Rng::seed_from_u64(seed))
                .expect("valid size")
                .collect();
        let by_index: Vec<u32> = sample_indices(items.len(), n, ChaCha8Rng::seed_from_u64(seed))
            .expect("valid size")
            .into_iter()
            .map(|i| items[i])
            .collect();
        prop_assert_eq!(by_item, by_index);
    }

    #[test]
    fn prop_duplicate_replays_remaining_output(
        (n, total) in n_and_total(2_000),
        consumed in 0usize..50,
        seed in any::<u64>(),
    ) {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let mut original = SequentialSampler::with_rng(0..total, n, total, rng).expect("valid size");
        for _ in 0..consumed.min(n) {
            original.advance();
        }

        let mut copy = original.duplicate();
        let copy_first = copy.next();
        let from_copy: Vec<usize> = copy_first.into_iter().chain(copy).collect();
        let from_original: Vec<usize> = original.collect();

        prop_assert_eq!(from_original.len(), n - consumed.min(n));
        prop_assert_eq!(from_copy, from_original);
    }

    #[test]
    fn prop_selection_sampler_matches_count(
        (n, total) in n_and_total(300),
        seed in any::<u64>(),
    ) {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let picked: Vec<usize> = SelectionSampler::with_rng(0..total, n, total, rng)
            .expect("valid size")
            .collect();

        prop_assert_eq!(picked.len(), n);
        prop_assert!(picked.windows(2).all(|w| w[0] < w[1]));
    }
}
