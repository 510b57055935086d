//! Runtime shape descriptors.
//!
//! A [`Shape`] is an ordered list of positive [`Dimension`]s. All index-taking
//! methods accept negative indices counting from the end (`-1` is the last
//! dimension) and reject anything outside `[-rank, rank)`.

use crate::error::VgradError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A single positive dimension size, optionally carrying a display name.
///
/// Two dimensions compare equal when their sizes match; the name only
/// affects `Display`.
#[derive(Clone, Debug)]
pub struct Dimension {
    size: usize,
    name: Option<Arc<str>>,
}

impl Dimension {
    pub fn new(size: usize) -> Result<Self, VgradError> {
        if size == 0 {
            return Err(VgradError::InvalidShape {
                shape: vec![size],
                reason: "dimension sizes must be positive".to_string(),
            });
        }
        Ok(Dimension { size, name: None })
    }

    pub fn named(size: usize, name: &str) -> Result<Self, VgradError> {
        let mut dim = Dimension::new(size)?;
        dim.name = Some(Arc::from(name));
        Ok(dim)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Size-1 dimension used by unsqueeze and keep-dim reductions.
    pub(crate) fn unit() -> Self {
        Dimension { size: 1, name: None }
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
    }
}

impl Eq for Dimension {}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.size),
        }
    }
}

/// An ordered sequence of dimensions (row-major).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    dims: Vec<Dimension>,
}

impl Shape {
    /// Builds a shape from plain sizes. Every size must be positive.
    pub fn new(sizes: &[usize]) -> Result<Self, VgradError> {
        if sizes.iter().any(|&s| s == 0) {
            return Err(VgradError::InvalidShape {
                shape: sizes.to_vec(),
                reason: "dimension sizes must be positive".to_string(),
            });
        }
        Ok(Shape {
            dims: sizes
                .iter()
                .map(|&size| Dimension { size, name: None })
                .collect(),
        })
    }

    pub fn from_dims(dims: Vec<Dimension>) -> Self {
        Shape { dims }
    }

    /// The rank-0 shape.
    pub fn scalar() -> Self {
        Shape { dims: Vec::new() }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    /// Product of all sizes; 1 for the scalar shape.
    pub fn flat_size(&self) -> usize {
        self.dims.iter().map(|d| d.size).product()
    }

    pub fn dims(&self) -> &[Dimension] {
        &self.dims
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.dims.iter().map(|d| d.size).collect()
    }

    /// Row-major strides: `strides[i]` is the product of the sizes after `i`.
    pub fn strides(&self) -> Vec<usize> {
        let rank = self.rank();
        let mut strides = vec![1; rank];
        for i in (0..rank.saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1].size;
        }
        strides
    }

    /// Maps a possibly negative index into `[0, rank)`.
    pub fn normalize_index(&self, index: isize) -> Result<usize, VgradError> {
        let rank = self.rank() as isize;
        let normalized = if index < 0 { rank + index } else { index };
        if normalized < 0 || normalized >= rank {
            return Err(VgradError::InvalidAxis {
                axis: index,
                rank: self.rank(),
            });
        }
        Ok(normalized as usize)
    }

    pub fn at(&self, index: isize) -> Result<&Dimension, VgradError> {
        let i = self.normalize_index(index)?;
        Ok(&self.dims[i])
    }

    /// Size of the dimension at `index`.
    pub fn size_at(&self, index: isize) -> Result<usize, VgradError> {
        self.at(index).map(Dimension::size)
    }

    pub fn remove(&self, index: isize) -> Result<Shape, VgradError> {
        let i = self.normalize_index(index)?;
        let mut dims = self.dims.clone();
        dims.remove(i);
        Ok(Shape { dims })
    }

    /// Inserts `dim` so that it ends up at position `index` of the result.
    ///
    /// Valid positions are `[0, rank]`; `index == rank` appends. Negative
    /// indices count from the end of the result, so `-1` appends and
    /// `s.remove(i)?.insert(i, d)` undoes `remove` for any valid `i`.
    pub fn insert(&self, index: isize, dim: Dimension) -> Result<Shape, VgradError> {
        let slots = self.rank() as isize + 1;
        let normalized = if index < 0 { slots + index } else { index };
        if normalized < 0 || normalized >= slots {
            return Err(VgradError::InvalidAxis {
                axis: index,
                rank: self.rank(),
            });
        }
        let i = normalized as usize;
        let mut dims = self.dims.clone();
        dims.insert(i, dim);
        Ok(Shape { dims })
    }

    /// Swaps the dimensions at positions `i` and `j`.
    pub fn transpose(&self, i: isize, j: isize) -> Result<Shape, VgradError> {
        let i = self.normalize_index(i)?;
        let j = self.normalize_index(j)?;
        let mut dims = self.dims.clone();
        dims.swap(i, j);
        Ok(Shape { dims })
    }

    /// The trailing `count` dimensions.
    pub fn last(&self, count: usize) -> Result<Shape, VgradError> {
        if count > self.rank() {
            return Err(VgradError::InvalidAxis {
                axis: count as isize,
                rank: self.rank(),
            });
        }
        Ok(Shape {
            dims: self.dims[self.rank() - count..].to_vec(),
        })
    }

    /// Converts a flat row-major offset into per-dimension indices.
    pub fn to_indices(&self, flat_index: usize) -> Result<Vec<usize>, VgradError> {
        if flat_index >= self.flat_size() {
            return Err(VgradError::IndexOutOfBounds {
                index: vec![flat_index],
                shape: self.sizes(),
            });
        }
        let mut remaining = flat_index;
        let indices = self
            .strides()
            .iter()
            .map(|&stride| {
                let idx = remaining / stride;
                remaining %= stride;
                idx
            })
            .collect();
        Ok(indices)
    }

    /// Converts per-dimension indices into a flat row-major offset.
    pub fn to_flat_index(&self, indices: &[usize]) -> Result<usize, VgradError> {
        if indices.len() != self.rank()
            || indices.iter().zip(&self.dims).any(|(&i, d)| i >= d.size)
        {
            return Err(VgradError::IndexOutOfBounds {
                index: indices.to_vec(),
                shape: self.sizes(),
            });
        }
        Ok(indices
            .iter()
            .zip(self.strides())
            .map(|(&i, stride)| i * stride)
            .sum())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dims.is_empty() {
            return write!(f, "scalar");
        }
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, " x ")?;
            }
            write!(f, "{}", dim)?;
        }
        Ok(())
    }
}

impl TryFrom<&[usize]> for Shape {
    type Error = VgradError;

    fn try_from(sizes: &[usize]) -> Result<Self, Self::Error> {
        Shape::new(sizes)
    }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = VgradError;

    fn try_from(sizes: Vec<usize>) -> Result<Self, Self::Error> {
        Shape::new(&sizes)
    }
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod tests;
