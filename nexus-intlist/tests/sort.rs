use nexus_intlist::search::binary_search;
use nexus_intlist::sort::{bubble_sort, insertion_sort, quick_sort, selection_sort};
use nexus_intlist::{IntList, SortAlgorithm};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn shapes(rng: &mut SmallRng) -> Vec<Vec<i32>> {
    let mut out = vec![
        vec![],
        vec![42],
        vec![7; 64],
        (0..100).collect(),
        (0..100).rev().collect(),
        (0..50).chain((0..50).rev()).collect(),
        vec![i32::MIN, i32::MAX, 0, i32::MIN, i32::MAX],
    ];
    for len in [2, 3, 17, 256, 1_000] {
        out.push((0..len).map(|_| rng.random_range(1..=99_999)).collect());
        out.push((0..len).map(|_| rng.random_range(0..4)).collect());
    }
    out
}

fn assert_sorted_permutation(input: &[i32], output: &[i32], name: &str) {
    let mut expected = input.to_vec();
    expected.sort();
    assert_eq!(output, &expected[..], "{name} on len {}", input.len());
}

// =============================================================================
// Free functions
// =============================================================================

#[test]
fn every_sort_yields_sorted_permutation() {
    let mut rng = SmallRng::seed_from_u64(42);
    let sorts: [(&str, fn(&mut [i32])); 4] = [
        ("bubble", bubble_sort),
        ("selection", selection_sort),
        ("insertion", insertion_sort),
        ("quick", quick_sort),
    ];

    for input in shapes(&mut rng) {
        for (name, sort) in sorts {
            let mut v = input.clone();
            sort(&mut v);
            assert_sorted_permutation(&input, &v, name);
        }
    }
}

#[test]
fn quick_sort_large_random() {
    let mut rng = SmallRng::seed_from_u64(99);
    let input: Vec<i32> = (0..200_000).map(|_| rng.random()).collect();
    let mut v = input.clone();
    quick_sort(&mut v);
    assert_sorted_permutation(&input, &v, "quick");
}

#[test]
fn quick_sort_large_duplicates() {
    let mut v = vec![1; 100_000];
    v.extend(std::iter::repeat_n(0, 100_000));
    quick_sort(&mut v);
    assert!(v[..100_000].iter().all(|&x| x == 0));
    assert!(v[100_000..].iter().all(|&x| x == 1));
}

// =============================================================================
// Through the list
// =============================================================================

#[test]
fn list_sort_touches_only_present_elements() {
    let mut rng = SmallRng::seed_from_u64(3);
    for algorithm in SortAlgorithm::ALL {
        for input in shapes(&mut rng) {
            // Large capacity so most slots are absent.
            let mut list = IntList::new(input.len() as isize * 3 + 1).unwrap();
            list.extend(input.iter().copied());
            let cap = list.capacity();

            let sorted = list.sort(algorithm);
            assert_eq!(sorted.len(), input.len());

            assert_eq!(list.len(), input.len());
            assert_eq!(list.capacity(), cap);
            assert_sorted_permutation(&input, &list.to_array(), algorithm.name());
        }
    }
}

#[test]
fn sorted_view_contains_iff_member() {
    let mut rng = SmallRng::seed_from_u64(5);
    let input: Vec<i32> = (0..300).map(|_| rng.random_range(0..1_000)).collect();

    let mut list: IntList = input.iter().copied().collect();
    let sorted = list.sort(SortAlgorithm::Quick);

    for probe in -5..1_005 {
        assert_eq!(sorted.contains(probe), input.contains(&probe), "probe {probe}");
        if let Some(pos) = sorted.position(probe) {
            assert_eq!(sorted.iter().nth(pos), Some(probe));
        }
    }
}

#[test]
fn binary_search_odd_sequence() {
    let v = [1, 3, 5, 7, 9];
    assert!(binary_search(&v, &5).is_some());
    assert!(binary_search(&v, &6).is_none());

    let mut list: IntList = [9, 7, 5, 3, 1].into_iter().collect();
    assert!(list.sort_and_search(SortAlgorithm::Selection, 5));
    assert!(!list.sort_and_search(SortAlgorithm::Selection, 6));
}

#[test]
fn contains_is_read_only() {
    let list: IntList = [5, 3, 9, 1].into_iter().collect();
    assert!(list.contains(9));
    assert_eq!(list.to_array(), vec![5, 3, 9, 1]);
}
