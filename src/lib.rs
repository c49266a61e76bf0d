//! Disjoint-set ("union-find") data structures in Rust. Generic over unsigned integer
//! element types.
//!
//! A disjoint set partitions a fixed universe of `N` elements, numbered `0..N`, into
//! non-overlapping sets. It answers two questions quickly: "are these two elements in the
//! same set?" and "merge the sets containing these two elements". Sets can only ever be
//! merged, never split.
//!
//! Two interchangeable policies implement the common `DisjointSet` trait:
//!  1. `DisjointSetBySize` - union-by-size. The smaller set is always hung beneath the
//!     larger one, which bounds tree height by `⌊log2 N⌋`. Lookups never modify the
//!     structure, and the size of any set can be read back.
//!  2. `DisjointSetCompressed` - union-by-rank with path halving. Every lookup flattens the
//!     path it walks, giving an amortized cost per operation that is effectively constant.
//!
//! Both policies give identical answers to connectivity queries. They only differ in the
//! internal shape of their trees and therefore in the representative `find` returns.
//!
//! Out of range indices and malformed construction input are reported as a
//! `DisjointSetError` rather than panicking, and a rejected call never modifies the set.
//!
//! The crate also ships the classic consumers of the structure: Kruskal's minimum
//! spanning forest, single linkage and connected component labelling.
//!
//! # Examples
//! ```
//!use disjoint_set::{DisjointSet, DisjointSetBySize, DisjointSetCompressed};
//!
//!let elements: Vec<u32> = vec![0, 1, 2, 3, 4, 5];
//!let mut by_size = DisjointSetBySize::new(&elements).unwrap();
//!let mut compressed = DisjointSetCompressed::new(&elements).unwrap();
//!
//!let sets: [&mut dyn DisjointSet<u32>; 2] = [&mut by_size, &mut compressed];
//!for set in sets {
//!    set.unite(0, 1).unwrap();
//!    set.unite(2, 3).unwrap();
//!    set.unite(0, 2).unwrap();
//!    assert!(set.are_connected(0, 3).unwrap());
//!    assert!(!set.are_connected(4, 5).unwrap());
//!    assert_eq!(3, set.set_count());
//!}
//! ```
//!
//! # References
//! * [Tarjan, R.E.; van Leeuwen, J. Worst-case analysis of set union algorithms.](https://dl.acm.org/doi/10.1145/62.2160)
//! * [Kruskal, J.B. On the shortest spanning subtree of a graph and the traveling salesman problem.](https://www.ams.org/journals/proc/1956-007-01/S0002-9939-1956-0078686-7/)

pub use crate::data_wrappers::{Edge, LinkageStep};
pub use crate::disjoint_set::by_size::DisjointSetBySize;
pub use crate::disjoint_set::compressed::DisjointSetCompressed;
pub use crate::disjoint_set::{DisjointSet, Element};
pub use crate::error::DisjointSetError;
pub use crate::kruskal::{component_labels, minimum_spanning_forest, single_linkage};
pub use crate::params::{DisjointSetParams, MergePolicy, ParamBuilder};

mod data_wrappers;
mod disjoint_set;
mod error;
mod kruskal;
mod params;
mod validation;
