//! Computation-graph nodes.
//!
//! Every [`Tensor`] owns an `Arc<Node>`. Leaves are created by factories and
//! `detach()`; every operation output owns a fresh `Unary` or `Binary` node that
//! strongly references its input nodes. Edges only point from outputs to
//! inputs, so plain reference counting never leaks.

use crate::autograd::backward_op::{BinaryBackward, UnaryBackward};
use crate::shape::Shape;
use crate::types::Element;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Global counter for generating unique node IDs.
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_node_id() -> NodeId {
    NodeId(NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Identity of a graph node. Two tensors are the same backward target only if
/// they share a `NodeId`, regardless of their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// The variant-specific part of a node.
pub enum NodeKind<T: Element> {
    /// A source tensor: constant, parameter, or detached value.
    Leaf,
    /// Result of an operation with one differentiable input.
    Unary {
        input: Arc<Node<T>>,
        grad_fn: Box<dyn UnaryBackward<T>>,
    },
    /// Result of an operation with two differentiable inputs.
    Binary {
        lhs: Arc<Node<T>>,
        rhs: Arc<Node<T>>,
        grad_fn: Box<dyn BinaryBackward<T>>,
    },
}

/// A node of the computation graph.
pub struct Node<T: Element> {
    id: NodeId,
    shape: Shape,
    kind: NodeKind<T>,
}

impl<T: Element> Node<T> {
    pub(crate) fn leaf(shape: Shape) -> Arc<Self> {
        Arc::new(Node {
            id: next_node_id(),
            shape,
            kind: NodeKind::Leaf,
        })
    }

    pub(crate) fn unary(
        shape: Shape,
        input: Arc<Node<T>>,
        grad_fn: Box<dyn UnaryBackward<T>>,
    ) -> Arc<Self> {
        Arc::new(Node {
            id: next_node_id(),
            shape,
            kind: NodeKind::Unary { input, grad_fn },
        })
    }

    pub(crate) fn binary(
        shape: Shape,
        lhs: Arc<Node<T>>,
        rhs: Arc<Node<T>>,
        grad_fn: Box<dyn BinaryBackward<T>>,
    ) -> Arc<Self> {
        Arc::new(Node {
            id: next_node_id(),
            shape,
            kind: NodeKind::Binary { lhs, rhs, grad_fn },
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Shape of the tensor this node produced.
    pub fn out_shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> &NodeKind<T> {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    /// Input nodes in declared order.
    pub fn inputs(&self) -> Vec<&Arc<Node<T>>> {
        match &self.kind {
            NodeKind::Leaf => Vec::new(),
            NodeKind::Unary { input, .. } => vec![input],
            NodeKind::Binary { lhs, rhs, .. } => vec![lhs, rhs],
        }
    }
}

impl<T: Element> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("id", &self.id).field("shape", &self.shape.sizes());
        match &self.kind {
            NodeKind::Leaf => s.field("kind", &"Leaf"),
            NodeKind::Unary { input, grad_fn } => s
                .field("grad_fn", grad_fn)
                .field("input", &input.id),
            NodeKind::Binary { lhs, rhs, grad_fn } => s
                .field("grad_fn", grad_fn)
                .field("inputs", &[lhs.id, rhs.id]),
        };
        s.finish()
    }
}
