//! Reference implementations of recurring competitive-programming patterns.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Algorithm {
    TwoPointers,
    SlidingWindow,
    BinarySearch,
    Dfs,
}

impl Algorithm {
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Algorithm::TwoPointers => "pair with a target sum in a sorted array",
            Algorithm::SlidingWindow => "maximum sum of a fixed-size window",
            Algorithm::BinarySearch => "index of a value in a sorted array",
            Algorithm::Dfs => "recursive depth-first traversal of a graph",
        }
    }

    /// Runs the snippet on a fixed sample input.
    pub fn demo(&self) -> String {
        match self {
            Algorithm::TwoPointers => {
                let values = [1, 2, 3, 4, 6];
                format!(
                    "two_pointers({:?}, 6) = {:?}",
                    values,
                    two_pointers(&values, 6)
                )
            }
            Algorithm::SlidingWindow => {
                let values = [2, 1, 5, 1, 3, 2];
                format!(
                    "max_window_sum({:?}, 3) = {}",
                    values,
                    max_window_sum(&values, 3)
                )
            }
            Algorithm::BinarySearch => {
                let values = [1, 3, 5, 7, 9, 11];
                format!(
                    "binary_search({:?}, 7) = {:?}",
                    values,
                    binary_search(&values, 7)
                )
            }
            Algorithm::Dfs => {
                let graph = sample_graph();
                format!("dfs(sample_graph, 1) = {:?}", dfs(&graph, 1))
            }
        }
    }
}

/// Indices of two entries of `sorted` adding up to `target`.
pub fn two_pointers(sorted: &[i64], target: i64) -> Option<(usize, usize)> {
    if sorted.is_empty() {
        return None;
    }

    let (mut left, mut right) = (0, sorted.len() - 1);
    while left < right {
        let sum = i128::from(sorted[left]) + i128::from(sorted[right]);
        match sum.cmp(&i128::from(target)) {
            Ordering::Equal => return Some((left, right)),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }
    None
}

/// Largest sum over any `k` consecutive values; 0 if there is no such window.
/// Sums are widened to `i128` so windows of extreme values cannot overflow.
pub fn max_window_sum(values: &[i64], k: usize) -> i128 {
    if k == 0 || values.len() < k {
        return 0;
    }

    let mut window: i128 = values[..k].iter().copied().map(i128::from).sum();
    let mut best = window;
    for i in k..values.len() {
        window += i128::from(values[i]) - i128::from(values[i - k]);
        best = best.max(window);
    }
    best
}

pub fn binary_search(sorted: &[i64], target: i64) -> Option<usize> {
    let (mut lo, mut hi) = (0, sorted.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match sorted[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Nodes reachable from `start`, in visiting order.
pub fn dfs<T>(graph: &HashMap<T, Vec<T>>, start: T) -> Vec<T>
where
    T: Copy + Eq + Hash,
{
    let mut visited = HashSet::new();
    let mut order = vec![];
    visit(graph, start, &mut visited, &mut order);
    order
}

fn visit<T>(graph: &HashMap<T, Vec<T>>, node: T, visited: &mut HashSet<T>, order: &mut Vec<T>)
where
    T: Copy + Eq + Hash,
{
    visited.insert(node);
    order.push(node);
    for &next in graph.get(&node).into_iter().flatten() {
        if !visited.contains(&next) {
            visit(graph, next, visited, order);
        }
    }
}

fn sample_graph() -> HashMap<u32, Vec<u32>> {
    HashMap::from([(1, vec![2, 3]), (2, vec![4]), (3, vec![4]), (4, vec![])])
}
