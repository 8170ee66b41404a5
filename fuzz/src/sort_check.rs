#![no_main]

use libfuzzer_sys::fuzz_target;

use rbst::{Record, Titled, quick_sort, selection_sort};

fuzz_target!(|titles: Vec<String>| {
    let records: Vec<Record> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| Record::new(i.to_string(), t.as_str(), "", 0.0))
        .collect();

    let mut expected: Vec<&str> = titles.iter().map(String::as_str).collect();
    expected.sort();

    let mut quick = records.clone();
    quick_sort(&mut quick);
    let actual: Vec<&str> = quick.iter().map(|r| r.title()).collect();
    assert_eq!(actual, expected);

    // Selection sort is quadratic; keep inputs small enough to stay fast.
    if records.len() <= 512 {
        let mut selection = records.clone();
        selection_sort(&mut selection);
        let actual: Vec<&str> = selection.iter().map(|r| r.title()).collect();
        assert_eq!(actual, expected);
    }
});
