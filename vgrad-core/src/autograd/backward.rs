use crate::autograd::graph::{Node, NodeId, NodeKind};
use crate::error::VgradError;
use crate::tensor::create::{ones_like, zeros_like};
use crate::tensor::Tensor;
use crate::types::FloatElement;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Computes `d output / d target` for every tensor in `targets`.
///
/// `output` must be rank 0. Targets are matched by graph identity, not by
/// value: a target receives the gradient of exactly the node it carries.
/// The returned gradients are detached leaves shaped like their targets, in
/// the same order; a target the output does not depend on gets zeros.
///
/// # Errors
/// `BackwardNonScalar` if `output` is not rank 0. A backward rule returning a
/// gradient of the wrong shape is reported as `InternalError`.
pub fn backward<T: FloatElement>(
    output: &Tensor<T>,
    targets: &[&Tensor<T>],
) -> Result<Vec<Tensor<T>>, VgradError> {
    if !output.shape().is_scalar() {
        return Err(VgradError::BackwardNonScalar {
            shape: output.dims(),
        });
    }

    let target_ids: HashSet<NodeId> = targets.iter().map(|t| t.node_id()).collect();
    let mut accumulators: Vec<Tensor<T>> = targets.iter().map(|t| zeros_like(t)).collect();

    let (order, relevant) = topological_order(output.node(), &target_ids);
    debug!(
        "backward: {} nodes reachable from output, {} lead to one of {} targets",
        order.len(),
        relevant.len(),
        targets.len()
    );
    if !relevant.contains(&output.node_id()) {
        debug!("backward: no target is reachable from the output; returning zeros");
        return Ok(accumulators);
    }

    let mut pending: HashMap<NodeId, Tensor<T>> = HashMap::new();
    pending.insert(output.node_id(), ones_like(output));

    // Consumers come after their inputs in `order`, so walking it backwards
    // finishes every node's incoming gradient before it is propagated.
    for node in order.iter().rev() {
        if !relevant.contains(&node.id()) {
            continue;
        }
        let Some(grad) = pending.remove(&node.id()) else {
            continue;
        };
        trace!("backward: propagating through {:?}", node);

        for (acc, target) in accumulators.iter_mut().zip(targets) {
            if target.node_id() == node.id() {
                *acc = accumulate(acc, &grad)?;
            }
        }

        match node.kind() {
            NodeKind::Leaf => {}
            NodeKind::Unary { input, grad_fn } => {
                if relevant.contains(&input.id()) {
                    let grad_input = grad_fn.backward(&grad)?;
                    send_gradient(&mut pending, input, grad_input)?;
                }
            }
            NodeKind::Binary { lhs, rhs, grad_fn } => {
                let lhs_relevant = relevant.contains(&lhs.id());
                let rhs_relevant = relevant.contains(&rhs.id());
                if lhs_relevant || rhs_relevant {
                    let (grad_lhs, grad_rhs) = grad_fn.backward(&grad)?;
                    if lhs_relevant {
                        send_gradient(&mut pending, lhs, grad_lhs)?;
                    }
                    if rhs_relevant {
                        send_gradient(&mut pending, rhs, grad_rhs)?;
                    }
                }
            }
        }
    }

    Ok(accumulators.iter().map(Tensor::detach).collect())
}

/// Post-order listing of the nodes reachable from `root` (inputs visited in
/// declared order), plus the set of nodes from which a target is reachable.
fn topological_order<T: FloatElement>(
    root: &Arc<Node<T>>,
    target_ids: &HashSet<NodeId>,
) -> (Vec<Arc<Node<T>>>, HashSet<NodeId>) {
    let mut order = Vec::new();
    let mut relevant = HashSet::new();
    let mut visited = HashSet::new();
    let mut stack: Vec<(Arc<Node<T>>, bool)> = vec![(Arc::clone(root), false)];

    while let Some((node, inputs_done)) = stack.pop() {
        if inputs_done {
            let leads_to_target = target_ids.contains(&node.id())
                || node.inputs().iter().any(|input| relevant.contains(&input.id()));
            if leads_to_target {
                relevant.insert(node.id());
            }
            order.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        stack.push((Arc::clone(&node), true));
        for input in node.inputs().into_iter().rev() {
            if !visited.contains(&input.id()) {
                stack.push((Arc::clone(input), false));
            }
        }
    }
    (order, relevant)
}

/// Adds a gradient contribution to the pending total of `node`.
fn send_gradient<T: FloatElement>(
    pending: &mut HashMap<NodeId, Tensor<T>>,
    node: &Arc<Node<T>>,
    grad: Tensor<T>,
) -> Result<(), VgradError> {
    if grad.shape() != node.out_shape() {
        return Err(VgradError::InternalError(format!(
            "backward rule produced gradient of shape {} for a node of shape {}",
            grad.shape(),
            node.out_shape()
        )));
    }
    let total = match pending.remove(&node.id()) {
        Some(existing) => accumulate(&existing, &grad)?,
        None => grad.detach(),
    };
    pending.insert(node.id(), total);
    Ok(())
}

/// Elementwise sum of two equally shaped gradients, as a fresh leaf.
fn accumulate<T: FloatElement>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    if a.shape() != b.shape() {
        return Err(VgradError::ShapeMismatch {
            expected: a.dims(),
            actual: b.dims(),
            operation: "gradient accumulation".to_string(),
        });
    }
    let data: Vec<T> = a
        .flat_view()
        .iter()
        .zip(b.flat_view())
        .map(|(&x, &y)| x + y)
        .collect();
    Tensor::from_vec_shape(data, a.shape().clone())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
