use crate::error::VgradError;
use crate::shape::Dimension;
use crate::types::Element;

/// Nested, shape-implied element data.
///
/// Used both to build tensors from literals and to read them back.
#[derive(Debug, Clone, PartialEq)]
pub enum NestedData<T> {
    Scalar(T),
    Array(Vec<NestedData<T>>),
}

impl<T: Element> NestedData<T> {
    /// Sizes implied by the nesting. Every level must be non-empty and all
    /// siblings must have the same shape.
    pub fn infer_shape(&self) -> Result<Vec<usize>, VgradError> {
        match self {
            NestedData::Scalar(_) => Ok(Vec::new()),
            NestedData::Array(items) => {
                let first = items.first().ok_or_else(|| VgradError::InvalidShape {
                    shape: vec![0],
                    reason: "nested data cannot contain empty arrays".to_string(),
                })?;
                let inner = first.infer_shape()?;
                for item in &items[1..] {
                    let other = item.infer_shape()?;
                    if other != inner {
                        return Err(VgradError::ShapeMismatch {
                            expected: inner,
                            actual: other,
                            operation: "from_nested".to_string(),
                        });
                    }
                }
                let mut sizes = Vec::with_capacity(inner.len() + 1);
                sizes.push(items.len());
                sizes.extend(inner);
                Ok(sizes)
            }
        }
    }

    pub(crate) fn flatten_into(&self, out: &mut Vec<T>) {
        match self {
            NestedData::Scalar(v) => out.push(*v),
            NestedData::Array(items) => items.iter().for_each(|item| item.flatten_into(out)),
        }
    }

    /// Returns the scalar payload, if this is a leaf.
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            NestedData::Scalar(v) => Some(*v),
            NestedData::Array(_) => None,
        }
    }
}

impl<T: Element> From<Vec<T>> for NestedData<T> {
    fn from(values: Vec<T>) -> Self {
        NestedData::Array(values.into_iter().map(NestedData::Scalar).collect())
    }
}

impl<T: Element> From<Vec<Vec<T>>> for NestedData<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        NestedData::Array(rows.into_iter().map(NestedData::from).collect())
    }
}

impl<T: Element> From<Vec<Vec<Vec<T>>>> for NestedData<T> {
    fn from(blocks: Vec<Vec<Vec<T>>>) -> Self {
        NestedData::Array(blocks.into_iter().map(NestedData::from).collect())
    }
}

/// A borrowed, read-only window into a tensor's buffer.
///
/// Obtained from [`Tensor::get`](crate::Tensor::get) or
/// [`Tensor::view`](crate::Tensor::view). It never copies.
#[derive(Debug, Clone, Copy)]
pub struct TensorView<'a, T> {
    dims: &'a [Dimension],
    data: &'a [T],
}

impl<'a, T: Element> TensorView<'a, T> {
    pub(crate) fn new(dims: &'a [Dimension], data: &'a [T]) -> Self {
        TensorView { dims, data }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.dims.iter().map(Dimension::size).collect()
    }

    pub fn flat_view(&self) -> &'a [T] {
        self.data
    }

    pub fn value(&self) -> Result<T, VgradError> {
        if !self.dims.is_empty() {
            return Err(VgradError::NotAScalar {
                shape: self.sizes(),
            });
        }
        Ok(self.data[0])
    }

    /// The `i`-th sub-view along the first axis.
    pub fn get(&self, i: usize) -> Result<TensorView<'a, T>, VgradError> {
        let first = self
            .dims
            .first()
            .ok_or(VgradError::InvalidAxis { axis: 0, rank: 0 })?;
        if i >= first.size() {
            return Err(VgradError::IndexOutOfBounds {
                index: vec![i],
                shape: self.sizes(),
            });
        }
        let inner = &self.dims[1..];
        let block: usize = inner.iter().map(Dimension::size).product();
        Ok(TensorView {
            dims: inner,
            data: &self.data[i * block..(i + 1) * block],
        })
    }

    pub fn to_nested(&self) -> NestedData<T> {
        match self.dims.first() {
            None => NestedData::Scalar(self.data[0]),
            Some(first) => NestedData::Array(
                (0..first.size())
                    .filter_map(|i| self.get(i).ok())
                    .map(|sub| sub.to_nested())
                    .collect(),
            ),
        }
    }
}
