//! Sparse matrix storage
//!
//! Compressed layouts follow the usual offsets / indices / values scheme:
//! `offsets` has one slot per major line plus one, and the entries of major
//! line `i` live in `indices[offsets[i]..offsets[i + 1]]`. For CSR the major
//! axis is the row, for CSC the column. COO keeps plain triplets.

use crate::error::{GraphError, GraphResult};
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// Storage scheme of a sparse matrix. Affects performance only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SparseFormat {
    /// Compressed sparse rows
    #[default]
    Csr,
    /// Compressed sparse columns
    Csc,
    /// Coordinate triplets
    Coo,
}

impl SparseFormat {
    /// Format describing the same storage read as the transposed matrix
    pub fn transposed(self) -> Self {
        match self {
            SparseFormat::Csr => SparseFormat::Csc,
            SparseFormat::Csc => SparseFormat::Csr,
            SparseFormat::Coo => SparseFormat::Coo,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Storage {
    Compressed {
        offsets: Vec<usize>,
        indices: Vec<usize>,
        values: Vec<f64>,
    },
    Triplets {
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<f64>,
    },
}

/// A `rows x cols` sparse matrix of `f64`
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    format: SparseFormat,
    storage: Storage,
}

impl SparseMatrix {
    /// Build from `(row, col, value)` triplets.
    ///
    /// Duplicate coordinates are kept and add up in every read.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: &[(usize, usize, f64)],
        format: SparseFormat,
    ) -> GraphResult<Self> {
        if let Some(&(r, c, _)) = triplets.iter().find(|(r, c, _)| *r >= rows || *c >= cols) {
            return Err(GraphError::Shape(format!(
                "entry ({}, {}) outside a {}x{} matrix",
                r, c, rows, cols
            )));
        }

        let storage = match format {
            SparseFormat::Coo => Storage::Triplets {
                row_indices: triplets.iter().map(|t| t.0).collect(),
                col_indices: triplets.iter().map(|t| t.1).collect(),
                values: triplets.iter().map(|t| t.2).collect(),
            },
            SparseFormat::Csr => Self::compress(rows, triplets.iter().map(|&(r, c, v)| (r, c, v))),
            SparseFormat::Csc => Self::compress(cols, triplets.iter().map(|&(r, c, v)| (c, r, v))),
        };

        Ok(SparseMatrix {
            rows,
            cols,
            format,
            storage,
        })
    }

    /// Matrix with no stored entries
    pub fn zeros(rows: usize, cols: usize, format: SparseFormat) -> Self {
        let storage = match format {
            SparseFormat::Coo => Storage::Triplets {
                row_indices: Vec::new(),
                col_indices: Vec::new(),
                values: Vec::new(),
            },
            SparseFormat::Csr => Self::compress(rows, std::iter::empty()),
            SparseFormat::Csc => Self::compress(cols, std::iter::empty()),
        };
        SparseMatrix {
            rows,
            cols,
            format,
            storage,
        }
    }

    /// Counting sort of `(major, minor, value)` entries into compressed form.
    /// Entries keep their relative order inside a major line.
    fn compress<I>(major_len: usize, entries: I) -> Storage
    where
        I: Iterator<Item = (usize, usize, f64)> + Clone,
    {
        let mut offsets = vec![0usize; major_len + 1];
        for (major, _, _) in entries.clone() {
            offsets[major + 1] += 1;
        }
        for i in 0..major_len {
            offsets[i + 1] += offsets[i];
        }

        let nnz = offsets[major_len];
        let mut indices = vec![0usize; nnz];
        let mut values = vec![0.0; nnz];
        let mut cursor = offsets.clone();
        for (major, minor, value) in entries {
            let slot = cursor[major];
            indices[slot] = minor;
            values[slot] = value;
            cursor[major] += 1;
        }

        Storage::Compressed {
            offsets,
            indices,
            values,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn format(&self) -> SparseFormat {
        self.format
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        match &self.storage {
            Storage::Compressed { values, .. } | Storage::Triplets { values, .. } => values.len(),
        }
    }

    /// Transpose in place by reinterpreting the storage.
    ///
    /// CSR becomes CSC of the transposed matrix and vice versa; COO swaps
    /// its coordinate vectors. No entry is moved.
    pub fn transpose(&mut self) {
        std::mem::swap(&mut self.rows, &mut self.cols);
        self.format = self.format.transposed();
        if let Storage::Triplets {
            row_indices,
            col_indices,
            ..
        } = &mut self.storage
        {
            std::mem::swap(row_indices, col_indices);
        }
    }

    /// Visit every stored entry as `(row, col, value)`
    pub fn for_each_entry<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize, f64),
    {
        match &self.storage {
            Storage::Compressed {
                offsets,
                indices,
                values,
            } => {
                for major in 0..offsets.len() - 1 {
                    for k in offsets[major]..offsets[major + 1] {
                        match self.format {
                            SparseFormat::Csc => f(indices[k], major, values[k]),
                            _ => f(major, indices[k], values[k]),
                        }
                    }
                }
            }
            Storage::Triplets {
                row_indices,
                col_indices,
                values,
            } => {
                for k in 0..values.len() {
                    f(row_indices[k], col_indices[k], values[k]);
                }
            }
        }
    }

    /// Stored entries as `(row, col, value)`
    pub fn triplets(&self) -> Vec<(usize, usize, f64)> {
        let mut out = Vec::with_capacity(self.nnz());
        self.for_each_entry(|r, c, v| out.push((r, c, v)));
        out
    }

    /// Copy into another storage format
    pub fn to_format(&self, format: SparseFormat) -> Self {
        if format == self.format {
            return self.clone();
        }
        let triplets = self.triplets();
        match format {
            SparseFormat::Coo => SparseMatrix {
                rows: self.rows,
                cols: self.cols,
                format,
                storage: Storage::Triplets {
                    row_indices: triplets.iter().map(|t| t.0).collect(),
                    col_indices: triplets.iter().map(|t| t.1).collect(),
                    values: triplets.iter().map(|t| t.2).collect(),
                },
            },
            SparseFormat::Csr => SparseMatrix {
                rows: self.rows,
                cols: self.cols,
                format,
                storage: Self::compress(self.rows, triplets.iter().copied()),
            },
            SparseFormat::Csc => SparseMatrix {
                rows: self.rows,
                cols: self.cols,
                format,
                storage: Self::compress(self.cols, triplets.iter().map(|&(r, c, v)| (c, r, v))),
            },
        }
    }

    /// Value at `(row, col)`, `None` outside the matrix
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        if let Storage::Compressed {
            offsets,
            indices,
            values,
        } = &self.storage
        {
            let (major, minor) = match self.format {
                SparseFormat::Csc => (col, row),
                _ => (row, col),
            };
            let sum = (offsets[major]..offsets[major + 1])
                .filter(|&k| indices[k] == minor)
                .fold(0.0, |acc, k| acc + values[k]);
            return Some(sum);
        }

        let mut sum = 0.0;
        self.for_each_entry(|r, c, v| {
            if r == row && c == col {
                sum += v;
            }
        });
        Some(sum)
    }

    /// Dense copy of a row
    pub fn row(&self, row: usize) -> Option<Array1<f64>> {
        if row >= self.rows {
            return None;
        }
        let mut out = Array1::zeros(self.cols);
        self.for_each_entry(|r, c, v| {
            if r == row {
                out[c] += v;
            }
        });
        Some(out)
    }

    /// Dense copy of a column
    pub fn col(&self, col: usize) -> Option<Array1<f64>> {
        if col >= self.cols {
            return None;
        }
        let mut out = Array1::zeros(self.rows);
        self.for_each_entry(|r, c, v| {
            if c == col {
                out[r] += v;
            }
        });
        Some(out)
    }

    pub fn to_dense(&self) -> Array2<f64> {
        let mut out = Array2::zeros((self.rows, self.cols));
        self.for_each_entry(|r, c, v| out[[r, c]] += v);
        out
    }

    /// Sparse matrix times dense vector
    pub fn dot(&self, x: ArrayView1<'_, f64>) -> GraphResult<Array1<f64>> {
        if x.len() != self.cols {
            return Err(GraphError::Shape(format!(
                "cannot multiply a {}x{} matrix with a vector of length {}",
                self.rows,
                self.cols,
                x.len()
            )));
        }

        let mut y = Array1::zeros(self.rows);
        match (&self.storage, self.format) {
            (
                Storage::Compressed {
                    offsets,
                    indices,
                    values,
                },
                SparseFormat::Csr,
            ) => {
                for (r, out) in y.iter_mut().enumerate() {
                    // fold from +0.0: `Sum` for floats starts at -0.0
                    *out = (offsets[r]..offsets[r + 1])
                        .fold(0.0, |acc, k| acc + values[k] * x[indices[k]]);
                }
            }
            _ => self.for_each_entry(|r, c, v| y[r] += v * x[c]),
        }
        Ok(y)
    }
}
