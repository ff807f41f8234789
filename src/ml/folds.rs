//! Stratified k-fold splitting.

use crate::domain::foundation::FoldError;
use std::collections::HashMap;
use std::hash::Hash;

/// Partitions `data` into `k` folds whose label proportions approximate the
/// whole dataset's.
///
/// Items sharing a label are dealt round-robin across the folds, with the
/// dealing position carried over between label classes so that small
/// classes do not pile up in the first fold. Every element lands in exactly
/// one fold, exactly once. Inputs are not mutated.
///
/// # Errors
///
/// - `ZeroFolds` when `k == 0`
/// - `TooManyFolds` when `k > data.len()`, which would force empty folds
/// - `LengthMismatch` when `data` and `labels` are not aligned 1:1
pub fn make_stratified_folds<T, L>(
    data: &[T],
    labels: &[L],
    k: usize,
) -> Result<Vec<Vec<T>>, FoldError>
where
    T: Clone,
    L: Eq + Hash,
{
    if k == 0 {
        return Err(FoldError::ZeroFolds);
    }
    if data.len() != labels.len() {
        return Err(FoldError::LengthMismatch {
            data: data.len(),
            labels: labels.len(),
        });
    }
    if k > data.len() {
        return Err(FoldError::TooManyFolds { k, len: data.len() });
    }

    // Group item indices by label, keeping first-seen label order so the
    // split is deterministic.
    let mut by_label: HashMap<&L, Vec<usize>> = HashMap::new();
    let mut label_order: Vec<&L> = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        let indices = by_label.entry(label).or_default();
        if indices.is_empty() {
            label_order.push(label);
        }
        indices.push(i);
    }

    let mut folds: Vec<Vec<T>> = vec![Vec::new(); k];
    let mut position = 0usize;
    for label in label_order {
        let indices = &by_label[label];
        for &index in indices {
            folds[position % k].push(data[index].clone());
            position += 1;
        }
    }

    Ok(folds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn every_item_lands_in_exactly_one_fold() {
        let data: Vec<i32> = (0..10).collect();
        let labels: Vec<i32> = data.iter().map(|x| x % 2).collect();

        let folds = make_stratified_folds(&data, &labels, 3).unwrap();

        let mut counts: HashMap<i32, usize> = HashMap::new();
        for fold in &folds {
            for item in fold {
                *counts.entry(*item).or_default() += 1;
            }
        }
        for item in &data {
            assert_eq!(counts[item], 1);
        }
    }

    #[test]
    fn produces_exactly_k_folds() {
        let data: Vec<i32> = (0..9).collect();
        let labels = vec!["a"; 9];
        let folds = make_stratified_folds(&data, &labels, 4).unwrap();
        assert_eq!(folds.len(), 4);
    }

    #[test]
    fn balances_labels_across_folds() {
        let data: Vec<i32> = (0..12).collect();
        let labels: Vec<i32> = data.iter().map(|x| x % 2).collect();

        let folds = make_stratified_folds(&data, &labels, 3).unwrap();

        // 6 items per class over 3 folds: each fold gets 2 of each class.
        for fold in &folds {
            let evens = fold.iter().filter(|x| *x % 2 == 0).count();
            let odds = fold.len() - evens;
            assert_eq!(evens, 2);
            assert_eq!(odds, 2);
        }
    }

    #[test]
    fn zero_folds_is_rejected() {
        let err = make_stratified_folds(&[1, 2, 3], &["a", "a", "a"], 0).unwrap_err();
        assert!(matches!(err, FoldError::ZeroFolds));
    }

    #[test]
    fn more_folds_than_items_is_rejected() {
        let err = make_stratified_folds(&[1, 2], &["a", "b"], 5).unwrap_err();
        assert!(matches!(err, FoldError::TooManyFolds { k: 5, len: 2 }));
    }

    #[test]
    fn misaligned_labels_are_rejected() {
        let err = make_stratified_folds(&[1, 2, 3], &["a", "b"], 2).unwrap_err();
        assert!(matches!(err, FoldError::LengthMismatch { data: 3, labels: 2 }));
    }

    #[test]
    fn does_not_mutate_inputs() {
        let data = vec![1, 2, 3, 4];
        let labels = vec!["a", "b", "a", "b"];
        let data_before = data.clone();
        let labels_before = labels.clone();

        make_stratified_folds(&data, &labels, 2).unwrap();

        assert_eq!(data, data_before);
        assert_eq!(labels, labels_before);
    }

    proptest! {
        #[test]
        fn partition_property_holds(
            labels in proptest::collection::vec(0u8..4, 1..64),
            k in 1usize..8,
        ) {
            prop_assume!(k <= labels.len());
            let data: Vec<usize> = (0..labels.len()).collect();

            let folds = make_stratified_folds(&data, &labels, k).unwrap();

            prop_assert_eq!(folds.len(), k);
            let mut counts: HashMap<usize, usize> = HashMap::new();
            for fold in &folds {
                for item in fold {
                    *counts.entry(*item).or_default() += 1;
                }
            }
            for item in &data {
                prop_assert_eq!(counts.get(item), Some(&1));
            }
        }

        #[test]
        fn fold_sizes_are_near_even(
            len in 1usize..64,
            k in 1usize..8,
        ) {
            prop_assume!(k <= len);
            let data: Vec<usize> = (0..len).collect();
            let labels = vec![0u8; len];

            let folds = make_stratified_folds(&data, &labels, k).unwrap();

            let min = folds.iter().map(Vec::len).min().unwrap();
            let max = folds.iter().map(Vec::len).max().unwrap();
            prop_assert!(max - min <= 1);
        }
    }
}
