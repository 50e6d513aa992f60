//! Elementwise arithmetic and inner product

use super::GraphArray;
use crate::error::{GraphError, GraphResult};
use crate::graph::NodeKey;
use ndarray::Zip;
use std::ops::{Add, Div, Mul, Sub};

/// Elementwise binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Apply to a pair of values. Division and powers follow IEEE-754.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Pow => a.powf(b),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
        }
    }
}

/// Right-hand side of an arithmetic operation
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, N: NodeKey> {
    Scalar(f64),
    Array(&'a GraphArray<N>),
}

impl<'a, N: NodeKey> From<f64> for Operand<'a, N> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a, N: NodeKey> From<&'a GraphArray<N>> for Operand<'a, N> {
    fn from(array: &'a GraphArray<N>) -> Self {
        Operand::Array(array)
    }
}

impl<N: NodeKey> GraphArray<N> {
    /// Apply `op` elementwise and return a new array.
    ///
    /// An array operand must have the same kind, the same base graph and the
    /// same buffer shape. The result keeps the kind, layout and orientation
    /// of `self`.
    pub fn operate<'a>(&self, other: impl Into<Operand<'a, N>>, op: BinaryOp) -> GraphResult<Self>
    where
        N: 'a,
    {
        let data = match other.into() {
            Operand::Scalar(s) => self.data.mapv(|a| op.apply(a, s)),
            Operand::Array(rhs) => {
                self.check_compatible(rhs)?;
                if self.data.shape() != rhs.data.shape() {
                    return Err(GraphError::Shape(format!(
                        "cannot apply '{}' to shapes {:?} and {:?}",
                        op.symbol(),
                        self.data.shape(),
                        rhs.data.shape()
                    )));
                }
                Zip::from(&self.data)
                    .and(&rhs.data)
                    .map_collect(|&a, &b| op.apply(a, b))
            }
        };

        Ok(GraphArray {
            base_graph: self.base_graph.clone(),
            kind: self.kind,
            data,
            layout: self.layout,
            orientation: self.orientation,
        })
    }

    /// Elementwise addition
    pub fn add<'a>(&self, other: impl Into<Operand<'a, N>>) -> GraphResult<Self>
    where
        N: 'a,
    {
        self.operate(other, BinaryOp::Add)
    }

    /// Elementwise subtraction
    pub fn sub<'a>(&self, other: impl Into<Operand<'a, N>>) -> GraphResult<Self>
    where
        N: 'a,
    {
        self.operate(other, BinaryOp::Sub)
    }

    /// Elementwise multiplication
    pub fn mul<'a>(&self, other: impl Into<Operand<'a, N>>) -> GraphResult<Self>
    where
        N: 'a,
    {
        self.operate(other, BinaryOp::Mul)
    }

    /// Elementwise division
    pub fn div<'a>(&self, other: impl Into<Operand<'a, N>>) -> GraphResult<Self>
    where
        N: 'a,
    {
        self.operate(other, BinaryOp::Div)
    }

    /// Elementwise exponentiation
    pub fn pow<'a>(&self, other: impl Into<Operand<'a, N>>) -> GraphResult<Self>
    where
        N: 'a,
    {
        self.operate(other, BinaryOp::Pow)
    }

    /// Inner product of two arrays of the same kind.
    ///
    /// Accepted contractions: flat with flat, and row (`[1, n]`) with
    /// column (`[n, 1]`).
    pub fn matmul(&self, other: &Self) -> GraphResult<f64> {
        self.check_compatible(other)?;
        let contractible = match (self.data.shape(), other.data.shape()) {
            ([_], [_]) => true,
            ([1, n], [m, 1]) => n == m,
            _ => false,
        };
        if !contractible {
            return Err(GraphError::Shape(format!(
                "cannot contract shapes {:?} and {:?}",
                self.data.shape(),
                other.data.shape()
            )));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b))
    }
}

// Operators on references, e.g. `&a + &b` or `&a * 2.0`, returning `GraphResult`
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<'a, N: NodeKey + 'a> $trait<&'a GraphArray<N>> for &GraphArray<N> {
            type Output = GraphResult<GraphArray<N>>;

            fn $method(self, rhs: &'a GraphArray<N>) -> Self::Output {
                self.operate(rhs, $op)
            }
        }

        impl<N: NodeKey> $trait<f64> for &GraphArray<N> {
            type Output = GraphResult<GraphArray<N>>;

            fn $method(self, rhs: f64) -> Self::Output {
                self.operate(rhs, $op)
            }
        }
    };
}

impl_binary_operator!(Add, add, BinaryOp::Add);
impl_binary_operator!(Sub, sub, BinaryOp::Sub);
impl_binary_operator!(Mul, mul, BinaryOp::Mul);
impl_binary_operator!(Div, div, BinaryOp::Div);
