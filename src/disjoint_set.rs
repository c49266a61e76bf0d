use crate::validation::{self, ElementValidator};
use crate::DisjointSetError;
use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

pub(super) mod by_size;
pub(super) mod compressed;

/// The element types a disjoint set can be built from: any unsigned primitive integer.
pub trait Element: PrimInt + Unsigned + Debug {}

impl<T: PrimInt + Unsigned + Debug> Element for T {}

/// The common contract of every disjoint set policy.
///
/// Elements are addressed by their index in `0..len()`. Every method checks its indices
/// before touching any state, so a call that returns an error leaves the set unchanged.
pub trait DisjointSet<T: Element> {
    /// Returns the index of the representative of the set containing `element`.
    fn find(&mut self, element: T) -> Result<usize, DisjointSetError>;

    /// Merges the sets containing `x` and `y`. A no-op if they are already connected.
    fn unite(&mut self, x: T, y: T) -> Result<(), DisjointSetError>;

    /// The number of elements in the universe.
    fn len(&self) -> usize;

    /// The number of disjoint sets currently held.
    fn set_count(&self) -> usize;

    /// Returns true if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `x` and `y` belong to the same set.
    fn are_connected(&mut self, x: T, y: T) -> Result<bool, DisjointSetError> {
        Ok(self.find(x)? == self.find(y)?)
    }
}

/// The parent mapping shared by every policy. A root `r` satisfies `parents[r] == r`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Forest {
    parents: Vec<usize>,
}

impl Forest {
    pub(crate) fn from_elements<T: Element>(
        elements: &[T],
        check_elements: bool,
    ) -> Result<Self, DisjointSetError> {
        if check_elements {
            ElementValidator::new(elements).validate_permutation()?;
        }
        Ok(Self::with_len(elements.len()))
    }

    pub(crate) fn with_len(n: usize) -> Self {
        Forest {
            parents: (0..n).collect(),
        }
    }

    pub(crate) fn index_of<T: Element>(&self, element: T) -> Result<usize, DisjointSetError> {
        validation::validate_index(element, self.parents.len())
    }

    pub(crate) fn parent(&self, index: usize) -> usize {
        self.parents[index]
    }

    pub(crate) fn set_parent(&mut self, index: usize, parent: usize) {
        self.parents[index] = parent;
    }

    pub(crate) fn len(&self) -> usize {
        self.parents.len()
    }

    pub(crate) fn root_count(&self) -> usize {
        self.parents
            .iter()
            .enumerate()
            .filter(|(index, parent)| index == *parent)
            .count()
    }

    /// Walks to the root of `index` without rewriting any link.
    pub(crate) fn root_of(&self, mut index: usize) -> usize {
        while self.parents[index] != index {
            index = self.parents[index];
        }
        index
    }

    /// Number of links between `index` and its root.
    #[cfg(test)]
    pub(crate) fn depth(&self, mut index: usize) -> usize {
        let mut depth = 0;
        while self.parents[index] != index {
            index = self.parents[index];
            depth += 1;
        }
        depth
    }
}
