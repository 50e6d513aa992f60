//! Functions over node and edge arrays
//!
//! Elementwise transforms return a new array of the same kind and shape.
//! Reductions read values in index order.

use crate::array::GraphArray;
use crate::error::{GraphError, GraphResult};
use crate::graph::{Element, NodeKey};

/// Apply an elementwise function and wrap the result in the same kind of array
pub fn apply_elementwise<N, F>(array: &GraphArray<N>, f: F) -> GraphArray<N>
where
    N: NodeKey,
    F: Fn(f64) -> f64,
{
    array.map_values(f)
}

/// Elementwise exponential
pub fn exp<N: NodeKey>(array: &GraphArray<N>) -> GraphArray<N> {
    apply_elementwise(array, f64::exp)
}

/// Elementwise natural logarithm
pub fn log<N: NodeKey>(array: &GraphArray<N>) -> GraphArray<N> {
    apply_elementwise(array, f64::ln)
}

/// Sum of all values; 0 for an empty array
pub fn sum<N: NodeKey>(array: &GraphArray<N>) -> f64 {
    array.view().sum()
}

/// Smallest value. NaN wins over any number.
pub fn min<N: NodeKey>(array: &GraphArray<N>) -> GraphResult<f64> {
    reduce(array, "min", |acc, v| if v < acc { v } else { acc })
}

/// Largest value. NaN wins over any number.
pub fn max<N: NodeKey>(array: &GraphArray<N>) -> GraphResult<f64> {
    reduce(array, "max", |acc, v| if v > acc { v } else { acc })
}

fn reduce<N, F>(array: &GraphArray<N>, name: &str, pick: F) -> GraphResult<f64>
where
    N: NodeKey,
    F: Fn(f64, f64) -> f64,
{
    let view = array.view();
    let mut values = view.iter().copied();
    let first = values.next().ok_or_else(|| empty_error(name))?;
    Ok(values.fold(first, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            pick(acc, v)
        }
    }))
}

/// Node or edge holding the smallest value; the first one on ties
pub fn argmin<N: NodeKey>(array: &GraphArray<N>) -> GraphResult<Element<N>> {
    arg_extreme(array, "argmin", |v, best| v < best)
}

/// Node or edge holding the largest value; the first one on ties
pub fn argmax<N: NodeKey>(array: &GraphArray<N>) -> GraphResult<Element<N>> {
    arg_extreme(array, "argmax", |v, best| v > best)
}

fn arg_extreme<N, F>(array: &GraphArray<N>, name: &str, better: F) -> GraphResult<Element<N>>
where
    N: NodeKey,
    F: Fn(f64, f64) -> bool,
{
    let view = array.view();
    let mut values = view.iter().copied().enumerate();
    let (mut best_idx, mut best) = values.next().ok_or_else(|| empty_error(name))?;
    for (i, v) in values {
        if better(v, best) {
            best_idx = i;
            best = v;
        }
    }
    array.base_graph().element_at(array.kind(), best_idx)
}

fn empty_error(name: &str) -> GraphError {
    GraphError::Shape(format!("{} of an empty array", name))
}
