use crate::disjoint_set::{DisjointSet, Element, Forest};
use crate::DisjointSetError;
use std::marker::PhantomData;

/// Union-by-size disjoint set.
///
/// `find` walks the parent chain without rewriting it. `unite` hangs the smaller set
/// beneath the larger one, which keeps every tree at most `⌊log2 N⌋` links deep.
#[derive(Debug, Clone)]
pub struct DisjointSetBySize<T> {
    forest: Forest,
    sizes: Vec<usize>,
    _element: PhantomData<T>,
}

impl<T: Element> DisjointSetBySize<T> {
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
    ///use disjoint_set::{DisjointSet, DisjointSetBySize};
    ///
    ///let mut set = DisjointSetBySize::new(&[0u32, 1, 2, 3]).unwrap();
    ///set.unite(0, 3).unwrap();
    ///assert!(set.are_connected(3, 0).unwrap());
    ///assert_eq!(2, set.size_of(0).unwrap());
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
        let sizes = vec![1; forest.len()];
        DisjointSetBySize {
            forest,
            sizes,
            _element: PhantomData,
        }
    }

    /// Returns the number of elements in the set containing `element`.
    pub fn size_of(&self, element: T) -> Result<usize, DisjointSetError> {
        let index = self.forest.index_of(element)?;
        Ok(self.sizes[self.forest.root_of(index)])
    }

    #[cfg(test)]
    pub(crate) fn forest(&self) -> &Forest {
        &self.forest
    }
}

impl<T: Element> DisjointSet<T> for DisjointSetBySize<T> {
    fn find(&mut self, element: T) -> Result<usize, DisjointSetError> {
        let index = self.forest.index_of(element)?;
        Ok(self.forest.root_of(index))
    }

    fn unite(&mut self, x: T, y: T) -> Result<(), DisjointSetError> {
        let x = self.forest.index_of(x)?;
        let y = self.forest.index_of(y)?;
        let i = self.forest.root_of(x);
        let j = self.forest.root_of(y);

        if i == j {
            return Ok(());
        }
        // On a tie the second operand's root goes beneath the first.
        if self.sizes[i] < self.sizes[j] {
            self.forest.set_parent(i, j);
            self.sizes[j] += self.sizes[i];
        } else {
            self.forest.set_parent(j, i);
            self.sizes[i] += self.sizes[j];
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
