use crate::disjoint_set::{DisjointSet, Element, Forest};
use crate::DisjointSetError;
use std::marker::PhantomData;

/// Union-by-rank disjoint set with path halving.
///
/// Every call to `find` points each node on the walked path at its grandparent, so trees
/// flatten over repeated queries. Combined with union-by-rank this gives an amortized cost
/// of O(α(N)) per operation, where α is the inverse Ackermann function.
#[derive(Debug, Clone)]
pub struct DisjointSetCompressed<T> {
    forest: Forest,
    ranks: Vec<usize>,
    _element: PhantomData<T>,
}

impl<T: Element> DisjointSetCompressed<T> {
    /// Creates a disjoint set where every element starts in its own set.
    ///
    /// # Parameters
    /// * `elements` - the universe, which must hold each of `0..elements.len()` exactly once.
    ///
    /// # Returns
    /// * The disjoint set, or `DisjointSetError::InvalidInput` if `elements` is not a
    ///   permutation of `0..elements.len()`.
    ///
    /// # Examples
    /// ```
    ///use disjoint_set::{DisjointSet, DisjointSetCompressed};
    ///
    ///let mut set = DisjointSetCompressed::new(&[3u8, 1, 0, 2]).unwrap();
    ///set.unite(1, 2).unwrap();
    ///assert!(set.are_connected(2, 1).unwrap());
    ///assert!(!set.are_connected(0, 1).unwrap());
    /// ```
    pub fn new(elements: &[T]) -> Result<Self, DisjointSetError> {
        Self::from_elements(elements, true)
    }

    /// Creates a disjoint set over the elements `0..n`, each in its own set.
    pub fn with_len(n: usize) -> Self {
        Self::from_forest(Forest::with_len(n))
    }

    pub(crate) fn from_elements(
        elements: &[T],
        check_elements: bool,
    ) -> Result<Self, DisjointSetError> {
        Ok(Self::from_forest(Forest::from_elements(elements, check_elements)?))
    }

    fn from_forest(forest: Forest) -> Self {
        let ranks = vec![0; forest.len()];
        DisjointSetCompressed {
            forest,
            ranks,
            _element: PhantomData,
        }
    }

    /// Returns the rank of the root of the set containing `element`, an upper bound on
    /// the height of that set's tree.
    pub fn rank_of(&mut self, element: T) -> Result<usize, DisjointSetError> {
        let root = self.find(element)?;
        Ok(self.ranks[root])
    }

    fn find_root(&mut self, mut index: usize) -> usize {
        while self.forest.parent(index) != index {
            let grandparent = self.forest.parent(self.forest.parent(index));
            self.forest.set_parent(index, grandparent);
            index = grandparent;
        }
        index
    }

    #[cfg(test)]
    pub(crate) fn forest(&self) -> &Forest {
        &self.forest
    }
}

impl<T: Element> DisjointSet<T> for DisjointSetCompressed<T> {
    fn find(&mut self, element: T) -> Result<usize, DisjointSetError> {
        let index = self.forest.index_of(element)?;
        Ok(self.find_root(index))
    }

    fn unite(&mut self, x: T, y: T) -> Result<(), DisjointSetError> {
        let x = self.forest.index_of(x)?;
        let y = self.forest.index_of(y)?;
        let mut i = self.find_root(x);
        let mut j = self.find_root(y);

        if i == j {
            return Ok(());
        }
        if self.ranks[i] < self.ranks[j] {
            std::mem::swap(&mut i, &mut j);
        }
        self.forest.set_parent(j, i);
        // Rank only grows when two trees of equal rank merge.
        if self.ranks[i] == self.ranks[j] {
            self.ranks[i] += 1;
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.forest.len()
    }

    fn set_count(&self) -> usize {
        self.forest.root_count()
    }
}
