use crate::{DisjointSet, DisjointSetBySize, DisjointSetCompressed, DisjointSetError, Element};

// Defaults for parameters
const MERGE_POLICY_DEFAULT: MergePolicy = MergePolicy::ByRank;
const CHECK_ELEMENTS_DEFAULT: bool = true;

/// The merge policy options, each backed by its own disjoint set implementation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MergePolicy {
    /// Union-by-size without path compression. See `DisjointSetBySize`.
    BySize,
    /// Union-by-rank with path halving. See `DisjointSetCompressed`.
    ByRank,
}

/// A wrapper around the options used when constructing a disjoint set whose policy is
/// chosen at runtime. Only use if you need to pick the policy dynamically. Otherwise
/// construct `DisjointSetBySize` or `DisjointSetCompressed` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSetParams {
    pub(crate) merge_policy: MergePolicy,
    pub(crate) check_elements: bool,
}

/// Builder object to set custom parameters.
pub struct ParamBuilder {
    merge_policy: Option<MergePolicy>,
    check_elements: Option<bool>,
}

impl Default for DisjointSetParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DisjointSetParams {
    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter builder
    pub fn builder() -> ParamBuilder {
        ParamBuilder {
            merge_policy: None,
            check_elements: None,
        }
    }

    /// The merge policy sets built with these parameters will use.
    pub fn merge_policy(&self) -> MergePolicy {
        self.merge_policy
    }

    /// Constructs a disjoint set over `elements` using the configured policy.
    ///
    /// # Parameters
    /// * `elements` - the universe, which must hold each of `0..elements.len()` exactly once.
    ///
    /// # Returns
    /// * The disjoint set, or `DisjointSetError::InvalidInput` if element checking is on
    ///   and `elements` is not a permutation of `0..elements.len()`.
    ///
    /// # Examples
    /// ```
    ///use disjoint_set::{DisjointSetParams, MergePolicy};
    ///
    ///let params = DisjointSetParams::builder()
    ///    .merge_policy(MergePolicy::BySize)
    ///    .build();
    ///let mut set = params.make_set(&[0u64, 1, 2]).unwrap();
    ///set.unite(0, 2).unwrap();
    ///assert_eq!(2, set.set_count());
    /// ```
    pub fn make_set<T: Element + 'static>(
        &self,
        elements: &[T],
    ) -> Result<Box<dyn DisjointSet<T>>, DisjointSetError> {
        let set: Box<dyn DisjointSet<T>> = match self.merge_policy {
            MergePolicy::BySize => Box::new(DisjointSetBySize::from_elements(
                elements,
                self.check_elements,
            )?),
            MergePolicy::ByRank => Box::new(DisjointSetCompressed::from_elements(
                elements,
                self.check_elements,
            )?),
        };
        Ok(set)
    }

    /// Constructs a disjoint set over `0..n` using the configured policy.
    pub fn make_set_with_len<T: Element + 'static>(&self, n: usize) -> Box<dyn DisjointSet<T>> {
        match self.merge_policy {
            MergePolicy::BySize => Box::new(DisjointSetBySize::with_len(n)),
            MergePolicy::ByRank => Box::new(DisjointSetCompressed::with_len(n)),
        }
    }
}

impl ParamBuilder {
    /// Sets the merge policy. Defaults to `MergePolicy::ByRank`, which flattens trees
    /// as it goes and is the better choice for long query-heavy workloads.
    ///
    /// # Parameters
    /// * merge_policy - the merge policy
    ///
    /// # Returns
    /// * the parameter builder
    pub fn merge_policy(mut self, merge_policy: MergePolicy) -> ParamBuilder {
        self.merge_policy = Some(merge_policy);
        self
    }

    /// Sets whether construction checks that the elements are a permutation of
    /// `0..N`. Turning this off saves a pass over the elements, but malformed input is
    /// then silently treated as the universe `0..N`. Index checks on queries and merges
    /// are always performed. Defaults to true.
    ///
    /// # Parameters
    /// * check_elements - whether to validate the construction elements
    ///
    /// # Returns
    /// * the parameter builder
    pub fn check_elements(mut self, check_elements: bool) -> ParamBuilder {
        self.check_elements = Some(check_elements);
        self
    }

    /// Finishes the building of the parameters. A call to this method is required to
    /// exit the builder pattern.
    ///
    /// # Returns
    /// * The completed parameters.
    pub fn build(self) -> DisjointSetParams {
        let check_elements = self.check_elements.unwrap_or(CHECK_ELEMENTS_DEFAULT);
        if !check_elements {
            println!(
                "DISJOINT_SET_WARNING: check_elements is off. Construction elements will \
                not be validated as a permutation of 0..N."
            );
        }
        DisjointSetParams {
            merge_policy: self.merge_policy.unwrap_or(MERGE_POLICY_DEFAULT),
            check_elements,
        }
    }
}
