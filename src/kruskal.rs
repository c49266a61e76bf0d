//! Graph algorithms built on top of the disjoint sets: Kruskal's minimum spanning forest,
//! the single linkage merge history and connected component labelling.

use crate::data_wrappers::{Edge, LinkageStep};
use crate::validation::{validate_endpoint, validate_weight};
use crate::{DisjointSet, DisjointSetBySize, DisjointSetError, DisjointSetParams, MergePolicy};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// # Parameters
/// * `n_nodes` - the number of nodes; edges reference nodes `0..n_nodes`.
/// * `edges` - the undirected, weighted edges of the graph. Weights must be finite.
/// * `merge_policy` - the disjoint set policy used to track connectivity.
///
/// # Returns
/// * The edges of the forest in ascending weight order. Equal weights keep their input
///   order. There are `n_nodes - c` edges, where `c` is the number of connected components.
///
/// # Examples
/// ```
///use disjoint_set::{minimum_spanning_forest, Edge, MergePolicy};
///
///let edges = vec![
///    Edge::new(0, 1, 4.0),
///    Edge::new(1, 2, 1.0),
///    Edge::new(0, 2, 2.0),
///    Edge::new(3, 4, 7.0),
///];
///let forest = minimum_spanning_forest(5, &edges, MergePolicy::ByRank).unwrap();
///assert_eq!(vec![Edge::new(1, 2, 1.0), Edge::new(0, 2, 2.0), Edge::new(3, 4, 7.0)], forest);
/// ```
pub fn minimum_spanning_forest<W: Float>(
    n_nodes: usize,
    edges: &[Edge<W>],
    merge_policy: MergePolicy,
) -> Result<Vec<Edge<W>>, DisjointSetError> {
    let sorted = sort_edges_by_weight(n_nodes, edges)?;
    let mut set = DisjointSetParams::builder()
        .merge_policy(merge_policy)
        .build()
        .make_set_with_len::<usize>(n_nodes);

    let mut forest = Vec::with_capacity(n_nodes.saturating_sub(1));
    for edge in sorted {
        if set.are_connected(edge.left, edge.right)? {
            continue;
        }
        set.unite(edge.left, edge.right)?;
        forest.push(edge.clone());
    }
    Ok(forest)
}

/// Runs single linkage over the graph: edges are taken in ascending weight order and each
/// one that joins two different sets is recorded as a merge.
///
/// # Returns
/// * One step per merge, in the order the merges happened.
pub fn single_linkage<W: Float>(
    n_nodes: usize,
    edges: &[Edge<W>],
) -> Result<Vec<LinkageStep<W>>, DisjointSetError> {
    let sorted = sort_edges_by_weight(n_nodes, edges)?;
    let mut set = DisjointSetBySize::<usize>::with_len(n_nodes);

    let mut steps = Vec::with_capacity(n_nodes.saturating_sub(1));
    for edge in sorted {
        let left_root = set.find(edge.left)?;
        let right_root = set.find(edge.right)?;
        if left_root == right_root {
            continue;
        }
        set.unite(left_root, right_root)?;
        steps.push(LinkageStep {
            left_root,
            right_root,
            weight: edge.weight,
            size: set.size_of(left_root)?,
        });
    }
    Ok(steps)
}

/// Labels every node with the connected component it belongs to.
///
/// # Parameters
/// * `n_nodes` - the number of nodes.
/// * `pairs` - the node pairs that are connected.
/// * `merge_policy` - the disjoint set policy used to track connectivity.
///
/// # Returns
/// * A label per node. Labels run from `0` to the number of components, numbered in the
///   order in which each component's lowest node appears.
pub fn component_labels(
    n_nodes: usize,
    pairs: &[(usize, usize)],
    merge_policy: MergePolicy,
) -> Result<Vec<usize>, DisjointSetError> {
    for (n, &(left, right)) in pairs.iter().enumerate() {
        validate_endpoint(left, n_nodes, n)?;
        validate_endpoint(right, n_nodes, n)?;
    }
    let mut set = DisjointSetParams::builder()
        .merge_policy(merge_policy)
        .build()
        .make_set_with_len::<usize>(n_nodes);
    for &(left, right) in pairs {
        set.unite(left, right)?;
    }

    let mut root_labels = HashMap::new();
    let mut labels = Vec::with_capacity(n_nodes);
    for node in 0..n_nodes {
        let root = set.find(node)?;
        let next_label = root_labels.len();
        labels.push(*root_labels.entry(root).or_insert(next_label));
    }
    Ok(labels)
}

fn sort_edges_by_weight<W: Float>(
    n_nodes: usize,
    edges: &[Edge<W>],
) -> Result<Vec<&Edge<W>>, DisjointSetError> {
    for (n, edge) in edges.iter().enumerate() {
        validate_weight(edge.weight, n)?;
        validate_endpoint(edge.left, n_nodes, n)?;
        validate_endpoint(edge.right, n_nodes, n)?;
    }
    let mut sorted: Vec<&Edge<W>> = edges.iter().collect();
    // Weights are finite at this point, so the comparison is total.
    sorted.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));
    Ok(sorted)
}
