use proptest::prelude::*;
use std::collections::BTreeMap;

use crate::{AvlMultiset, Error, MinHeap};

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    Remove(i32),
    FindMin,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // Narrow value range so sequences hit duplicates and absent keys often
    let op = prop_oneof![
        3 => (0i32..32).prop_map(Op::Insert),
        2 => (0i32..32).prop_map(Op::Remove),
        1 => Just(Op::FindMin),
    ];
    prop::collection::vec(op, 0..=400)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_multiset_matches_model(ops in ops_strategy()) {
        let mut multiset = AvlMultiset::new();
        let mut model: BTreeMap<i32, usize> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(value) => {
                    multiset.insert(value);
                    *model.entry(value).or_insert(0) += 1;
                }
                Op::Remove(value) => {
                    let removed = multiset.remove(&value);
                    match model.get_mut(&value) {
                        Some(count) => {
                            prop_assert_eq!(removed, Ok(()));
                            *count -= 1;
                            if *count == 0 {
                                model.remove(&value);
                            }
                        }
                        None => prop_assert_eq!(removed, Err(Error::NotFound)),
                    }
                }
                Op::FindMin => match model.keys().next() {
                    Some(min) => prop_assert_eq!(multiset.find_min(), Ok(min)),
                    None => prop_assert_eq!(multiset.find_min(), Err(Error::EmptyCollection)),
                },
            }

            multiset.check_consistency();
            let expected_len: usize = model.values().sum();
            prop_assert_eq!(multiset.len(), expected_len);
            prop_assert_eq!(multiset.is_empty(), model.is_empty());
        }

        for (value, count) in &model {
            prop_assert_eq!(multiset.count(value), *count);
        }

        let expected: Vec<i32> = model
            .iter()
            .flat_map(|(value, count)| std::iter::repeat(*value).take(*count))
            .collect();
        let traversed: Vec<i32> = multiset.iter().copied().collect();
        prop_assert_eq!(traversed, expected);
    }

    #[test]
    fn prop_heap_drains_sorted(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut values = values;
        let mut heap = MinHeap::new();
        for value in values.iter() {
            heap.add(*value);
        }

        values.sort_unstable();
        for value in values {
            prop_assert_eq!(heap.remove(), Ok(value));
        }
        prop_assert_eq!(heap.remove(), Err(Error::EmptyCollection));
    }
}
