use crate::autograd::graph::{Node, NodeId, NodeKind};
use crate::error::VgradError;
use crate::shape::Shape;
use crate::types::{DType, Element};
use std::sync::Arc;

pub mod create;
pub mod view;

mod math_methods;
mod reduction_methods;
mod traits;
mod view_methods;

pub use view::{NestedData, TensorView};

/// An immutable n-dimensional array that remembers how it was computed.
///
/// A `Tensor` is a cheap handle: cloning it clones three reference-counted
/// pointers. The element buffer is never mutated after construction, so
/// views (reshape, squeeze, unsqueeze) share it with their input.
///
/// Each tensor owns a graph [`Node`]. Leaves are built by the factories and
/// by [`Tensor::detach`]; every operation output records its inputs and a
/// backward rule, which [`crate::autograd::backward`] uses to compute
/// gradients.
pub struct Tensor<T: Element> {
    pub(crate) shape: Shape,
    pub(crate) data: Arc<Vec<T>>,
    pub(crate) node: Arc<Node<T>>,
}

impl<T: Element> Tensor<T> {
    /// Creates a leaf tensor from a flat row-major buffer.
    ///
    /// # Errors
    /// `InvalidShape` if a size is zero, `TensorCreationError` if
    /// `data.len()` differs from the product of `shape`.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self, VgradError> {
        let shape = Shape::new(shape)?;
        Self::from_vec_shape(data, shape)
    }

    /// Like [`Tensor::from_vec`] but with a prebuilt (possibly named) shape.
    pub fn from_vec_shape(data: Vec<T>, shape: Shape) -> Result<Self, VgradError> {
        Self::from_shared(Arc::new(data), shape)
    }

    /// Creates a leaf tensor over an existing shared buffer without copying.
    pub fn from_shared(data: Arc<Vec<T>>, shape: Shape) -> Result<Self, VgradError> {
        if data.len() != shape.flat_size() {
            return Err(VgradError::TensorCreationError {
                data_len: data.len(),
                shape: shape.sizes(),
            });
        }
        Ok(Self::new_leaf(data, shape))
    }

    /// Creates a rank-0 leaf tensor.
    pub fn scalar(value: T) -> Self {
        Self::new_leaf(Arc::new(vec![value]), Shape::scalar())
    }

    /// Creates a leaf tensor from nested data. The shape is inferred from the
    /// nesting; ragged or empty levels are rejected.
    pub fn from_nested(nested: impl Into<NestedData<T>>) -> Result<Self, VgradError> {
        let nested = nested.into();
        let sizes = nested.infer_shape()?;
        let shape = Shape::new(&sizes)?;
        let mut flat = Vec::with_capacity(shape.flat_size());
        nested.flatten_into(&mut flat);
        Self::from_vec_shape(flat, shape)
    }

    /// Builds a leaf without checking the buffer length.
    pub(crate) fn new_leaf(data: Arc<Vec<T>>, shape: Shape) -> Self {
        let node = Node::leaf(shape.clone());
        Tensor { shape, data, node }
    }

    /// Wraps the result of an operation together with its graph node.
    pub(crate) fn from_op(data: Arc<Vec<T>>, shape: Shape, kind: NodeKind<T>) -> Self {
        let node = match kind {
            NodeKind::Leaf => Node::leaf(shape.clone()),
            NodeKind::Unary { input, grad_fn } => Node::unary(shape.clone(), input, grad_fn),
            NodeKind::Binary { lhs, rhs, grad_fn } => {
                Node::binary(shape.clone(), lhs, rhs, grad_fn)
            }
        };
        Tensor { shape, data, node }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Plain sizes of every dimension.
    pub fn dims(&self) -> Vec<usize> {
        self.shape.sizes()
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.shape.flat_size()
    }

    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// The elements in row-major order.
    pub fn flat_view(&self) -> &[T] {
        &self.data
    }

    /// Copies the elements out into a new vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.as_ref().clone()
    }

    pub(crate) fn shared_data(&self) -> &Arc<Vec<T>> {
        &self.data
    }

    pub fn node(&self) -> &Arc<Node<T>> {
        &self.node
    }

    pub fn node_id(&self) -> NodeId {
        self.node.id()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// The single element of a rank-0 tensor.
    pub fn value(&self) -> Result<T, VgradError> {
        if !self.shape.is_scalar() {
            return Err(VgradError::NotAScalar {
                shape: self.shape.sizes(),
            });
        }
        Ok(self.data[0])
    }

    /// Borrowed view of the whole tensor.
    pub fn view(&self) -> TensorView<'_, T> {
        TensorView::new(self.shape.dims(), &self.data)
    }

    /// Borrowed view of the `i`-th sub-tensor along the first axis.
    pub fn get(&self, i: usize) -> Result<TensorView<'_, T>, VgradError> {
        self.view().get(i)
    }

    /// The elements as nested data, mirroring the shape.
    pub fn nested_view(&self) -> NestedData<T> {
        self.view().to_nested()
    }

    /// A new leaf sharing this tensor's buffer but cut off from its history.
    pub fn detach(&self) -> Self {
        Self::new_leaf(Arc::clone(&self.data), self.shape.clone())
    }
}

#[cfg(test)]
#[path = "tensor_test.rs"]
mod tests;
