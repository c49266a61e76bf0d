use disjoint_set::{DisjointSet, DisjointSetError};

pub(crate) type MakeSet = fn(&[usize]) -> Result<Box<dyn DisjointSet<usize>>, DisjointSetError>;

pub(crate) fn universe(n: usize) -> Vec<usize> {
    (0..n).collect()
}

pub(crate) fn test_initially_disjoint(make_set: MakeSet) {
    let elements = universe(6);
    let mut set = make_set(&elements).unwrap();
    for &element in &elements {
        assert_eq!(element, set.find(element).unwrap());
    }
    assert_eq!(6, set.set_count());
    assert_eq!(6, set.len());
}

pub(crate) fn test_simple_union(make_set: MakeSet) {
    let mut set = make_set(&universe(6)).unwrap();

    assert!(!set.are_connected(0, 1).unwrap());
    assert!(!set.are_connected(2, 3).unwrap());
    assert!(!set.are_connected(4, 5).unwrap());

    set.unite(0, 1).unwrap();
    assert!(set.are_connected(0, 1).unwrap());

    set.unite(2, 3).unwrap();
    assert!(set.are_connected(2, 3).unwrap());

    set.unite(4, 5).unwrap();
    assert!(set.are_connected(4, 5).unwrap());
    assert_eq!(3, set.set_count());
}

pub(crate) fn test_complex_union(make_set: MakeSet) {
    let mut set = make_set(&universe(6)).unwrap();

    set.unite(0, 1).unwrap();
    set.unite(2, 3).unwrap();
    set.unite(0, 2).unwrap();

    assert!(set.are_connected(0, 1).unwrap());
    assert!(set.are_connected(2, 3).unwrap());
    assert!(set.are_connected(0, 3).unwrap());
    assert!(set.are_connected(1, 2).unwrap());
    assert!(!set.are_connected(4, 5).unwrap());
    assert!(!set.are_connected(0, 4).unwrap());
    assert_eq!(3, set.set_count());
}

pub(crate) fn test_self_union_is_noop(make_set: MakeSet) {
    let mut set = make_set(&universe(3)).unwrap();
    set.unite(1, 1).unwrap();
    assert_eq!(3, set.set_count());
    assert_eq!(1, set.find(1).unwrap());
}

pub(crate) fn test_repeated_union_is_noop(make_set: MakeSet) {
    let mut set = make_set(&universe(4)).unwrap();
    set.unite(0, 1).unwrap();
    let root = set.find(0).unwrap();
    set.unite(1, 0).unwrap();
    set.unite(0, 1).unwrap();
    assert_eq!(root, set.find(1).unwrap());
    assert_eq!(3, set.set_count());
    assert!(!set.are_connected(0, 2).unwrap());
}

pub(crate) fn test_find_is_idempotent(make_set: MakeSet) {
    let mut set = make_set(&universe(8)).unwrap();
    for i in 0..7 {
        set.unite(i, i + 1).unwrap();
    }
    for i in 0..8 {
        let first = set.find(i).unwrap();
        assert_eq!(first, set.find(i).unwrap());
    }
}

pub(crate) fn test_shuffled_elements(make_set: MakeSet) {
    let mut set = make_set(&[3, 0, 4, 1, 2]).unwrap();
    for i in 0..5 {
        assert_eq!(i, set.find(i).unwrap());
    }
    set.unite(4, 0).unwrap();
    assert!(set.are_connected(0, 4).unwrap());
}

pub(crate) fn test_empty_universe(make_set: MakeSet) {
    let mut set = make_set(&[]).unwrap();
    assert!(set.is_empty());
    assert_eq!(0, set.set_count());
    assert!(matches!(set.find(0), Err(DisjointSetError::OutOfRange(_))));
}

pub(crate) fn test_duplicate_elements(make_set: MakeSet) {
    let result = make_set(&[0, 1, 1]);
    assert!(matches!(result, Err(DisjointSetError::InvalidInput(_))));
}

pub(crate) fn test_elements_out_of_range(make_set: MakeSet) {
    let result = make_set(&[0, 1, 3]);
    assert!(matches!(result, Err(DisjointSetError::InvalidInput(_))));
}

pub(crate) fn test_out_of_range_queries(make_set: MakeSet) {
    let mut set = make_set(&universe(4)).unwrap();
    set.unite(0, 1).unwrap();
    assert!(matches!(set.find(4), Err(DisjointSetError::OutOfRange(_))));
    assert!(matches!(set.unite(1, 4), Err(DisjointSetError::OutOfRange(_))));
    assert!(matches!(set.unite(9, 2), Err(DisjointSetError::OutOfRange(_))));
    assert!(matches!(
        set.are_connected(0, usize::MAX),
        Err(DisjointSetError::OutOfRange(_))
    ));
    // Nothing was merged by the rejected calls.
    assert_eq!(3, set.set_count());
    assert!(!set.are_connected(1, 2).unwrap());
}

pub(crate) fn test_chain_merges_everything(make_set: MakeSet) {
    const N: usize = 100;
    let mut set = make_set(&universe(N)).unwrap();
    for i in (1..N).rev() {
        set.unite(i, i - 1).unwrap();
    }
    assert_eq!(1, set.set_count());
    let root = set.find(0).unwrap();
    for i in 0..N {
        assert_eq!(root, set.find(i).unwrap());
    }
}
