use crate::{DisjointSetError, Element};
use num_traits::Float;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ElementValidator<'a, T> {
    elements: &'a [T],
}

impl<'a, T: Element> ElementValidator<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self { elements }
    }

    /// Checks that the elements are exactly the values `0..N`, each once, where `N` is
    /// the number of elements.
    pub(crate) fn validate_permutation(&self) -> Result<(), DisjointSetError> {
        let n = self.elements.len();
        let mut seen = vec![false; n];
        for (position, element) in self.elements.iter().enumerate() {
            let value = element.to_usize().ok_or_else(|| {
                DisjointSetError::InvalidInput(format!(
                    "{position}th element ({element:?}) does not fit in a usize"
                ))
            })?;
            if value >= n {
                return Err(DisjointSetError::InvalidInput(format!(
                    "{position}th element ({value}) is not below the element count {n}"
                )));
            }
            if seen[value] {
                return Err(DisjointSetError::InvalidInput(format!(
                    "{position}th element ({value}) appears more than once"
                )));
            }
            seen[value] = true;
        }
        Ok(())
    }
}

/// Converts an element to its index, failing when it lies outside of `0..len`.
pub(crate) fn validate_index<T: Element>(element: T, len: usize) -> Result<usize, DisjointSetError> {
    match element.to_usize() {
        Some(index) if index < len => Ok(index),
        _ => Err(DisjointSetError::OutOfRange(format!(
            "element {element:?} is not in 0..{len}"
        ))),
    }
}

pub(crate) fn validate_endpoint(
    node: usize,
    n_nodes: usize,
    edge_no: usize,
) -> Result<(), DisjointSetError> {
    if node >= n_nodes {
        return Err(DisjointSetError::OutOfRange(format!(
            "{edge_no}th edge references node {node}, but there are only {n_nodes} nodes"
        )));
    }
    Ok(())
}

pub(crate) fn validate_weight<W: Float>(weight: W, edge_no: usize) -> Result<(), DisjointSetError> {
    if !weight.is_finite() {
        return Err(DisjointSetError::InvalidInput(format!(
            "{edge_no}th edge has a non-finite weight"
        )));
    }
    Ok(())
}
