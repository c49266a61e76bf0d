/// A weighted, undirected edge between two nodes of a graph whose nodes are numbered
/// `0..n_nodes`.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<W> {
    pub left: usize,
    pub right: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(left: usize, right: usize, weight: W) -> Self {
        Edge { left, right, weight }
    }
}

/// One merge of a single linkage pass: the roots of the two sets that were joined, the
/// weight of the edge that joined them and the size of the resulting set.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkageStep<W> {
    pub left_root: usize,
    pub right_root: usize,
    pub weight: W,
    pub size: usize,
}
