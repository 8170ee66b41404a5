#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use rbst::{BinarySearchTree, Keyed, Record, TraversalOrder};

#[derive(Arbitrary, Debug)]
enum TreeMethod {
    Get { key: u8 },
    Insert { key: u8, amount: u16 },
    Delete { key: u8 },
    Traverse,
}

// Keys are drawn from a small space so duplicates and deletions of present keys are common.
fn key_of(key: u8) -> String {
    format!("{:03}", key % 64)
}

fuzz_target!(|methods: Vec<TreeMethod>| {
    let mut tree = BinarySearchTree::<Record>::new();
    // Multiplicity of each key currently in the tree.
    let mut model = BTreeMap::<String, usize>::new();

    for m in &methods {
        match m {
            TreeMethod::Get { key } => {
                let key = key_of(*key);
                let found = tree.get(&key).map(|r| r.key().to_string());
                assert_eq!(found.is_some(), model.contains_key(&key));
                if let Some(found) = found {
                    assert_eq!(found, key);
                }
            }
            TreeMethod::Insert { key, amount } => {
                let key = key_of(*key);
                tree.insert(Record::new(key.clone(), "", "", f64::from(*amount)));
                *model.entry(key).or_default() += 1;
            }
            TreeMethod::Delete { key } => {
                let key = key_of(*key);
                let removed = tree.remove(&key);
                eprintln!("Delete: {:?} {:?}", key, removed.is_some());
                match model.get_mut(&key) {
                    Some(count) => {
                        assert_eq!(removed.map(|r| r.key().to_string()), Some(key.clone()));
                        *count -= 1;
                        if *count == 0 {
                            model.remove(&key);
                        }
                    }
                    None => assert!(removed.is_none()),
                }
            }
            TreeMethod::Traverse => {
                let expected = model.values().sum::<usize>();
                for order in [
                    TraversalOrder::InOrder,
                    TraversalOrder::PreOrder,
                    TraversalOrder::PostOrder,
                ] {
                    assert_eq!(tree.traversal(order).count(), expected);
                }
            }
        }
    }

    let expected: Vec<&str> = model
        .iter()
        .flat_map(|(k, n)| std::iter::repeat_n(k.as_str(), *n))
        .collect();
    let actual: Vec<&str> = tree.iter().map(|r| r.key()).collect();
    assert_eq!(actual, expected);
    assert_eq!(tree.len(), expected.len());
});
