use std::fmt;

use log::{
    debug,
    trace
};
use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::function::Function;
use crate::math::function::tabulated::functionpoint::FunctionPoint;
use crate::math::function::tabulated::tabulatedfunction::{
    check_finite,
    check_neighbours,
    check_points,
    equally_spaced_points,
    fmt_points,
    in_domain,
    interpolate,
    PointSequence,
    TabulatedFunction
};
use crate::math::function::tabulated::tabulatedfunctionerror::{
    PointBound,
    TabulatedFunctionError
};
use crate::math::tolerance::{
    approx_eq,
    strictly_ascending,
    EPSILON
};

// ─────────────────────────────────────────────
// FunctionNode
// ─────────────────────────────────────────────
//
// Nodes live in an arena and link to each other by slot index.
// Slot HEAD is the sentinel: head.next is the first point and head.prev
// the last, so an empty list is a head pointing at itself.

const HEAD: usize = 0;

#[derive(Clone, Debug)]
struct FunctionNode {
    point: FunctionPoint,
    prev: usize,
    next: usize
}

impl FunctionNode {
    fn sentinel() -> FunctionNode {
        FunctionNode {
            point: FunctionPoint::new(f64::NAN, f64::NAN),
            prev: HEAD,
            next: HEAD
        }
    }
}

// ─────────────────────────────────────────────
// LinkedListTabulatedFunction
// ─────────────────────────────────────────────

/// Tabulated function over a circular doubly-linked list.
///
/// Indexed access walks from whichever end of the list is nearer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "PointSequence", try_from = "PointSequence")]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<FunctionNode>,
    free_slots: Vec<usize>,
    points_count: usize
}

impl LinkedListTabulatedFunction {
    /// An empty function, meant to be filled with `add_point`.
    pub fn new() -> LinkedListTabulatedFunction {
        LinkedListTabulatedFunction {
            nodes: vec![FunctionNode::sentinel()],
            free_slots: Vec::new(),
            points_count: 0
        }
    }

    fn from_checked_points(points: &[FunctionPoint]) -> LinkedListTabulatedFunction {
        let mut function = LinkedListTabulatedFunction::new();
        function.nodes.reserve(points.len());
        for &point in points {
            function.add_node_to_tail(point);
        }
        function
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.nodes[HEAD].next,
            back: self.nodes[HEAD].prev,
            remaining: self.points_count
        }
    }

    /// Removes every point, keeping the arena allocation.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[HEAD] = FunctionNode::sentinel();
        self.free_slots.clear();
        self.points_count = 0;
    }

    /// Inserts `point` so that it ends up at `index`, which may equal the
    /// current count. The point must fit between its new neighbours.
    pub fn insert_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        if index > self.points_count {
            return Err(TabulatedFunctionError::index_out_of_range(index, self.points_count as isize));
        }

        let next = if index == self.points_count { HEAD } else { self.node_index(index)? };
        let prev = self.nodes[next].prev;
        check_neighbours(point.x(), self.x_of(prev), self.x_of(next))?;

        self.link_before(next, point);
        Ok(())
    }

    fn x_of(&self, slot: usize) -> Option<f64> {
        if slot == HEAD {
            None
        } else {
            Some(self.nodes[slot].point.x())
        }
    }

    fn allocate(&mut self, point: FunctionPoint, prev: usize, next: usize) -> usize {
        let node = FunctionNode { point, prev, next };
        match self.free_slots.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn node_index(&self, index: usize) -> Result<usize, TabulatedFunctionError> {
        if index >= self.points_count {
            return Err(TabulatedFunctionError::index_out_of_range(index, self.points_count as isize - 1));
        }

        let mut slot;
        if index <= self.points_count / 2 {
            trace!("walking forward to index {} of {}", index, self.points_count);
            slot = self.nodes[HEAD].next;
            for _ in 0..index {
                slot = self.nodes[slot].next;
            }
        } else {
            trace!("walking backward to index {} of {}", index, self.points_count);
            slot = self.nodes[HEAD].prev;
            for _ in index..(self.points_count - 1) {
                slot = self.nodes[slot].prev;
            }
        }
        Ok(slot)
    }

    fn link_before(&mut self, next: usize, point: FunctionPoint) -> usize {
        let prev = self.nodes[next].prev;
        let slot = self.allocate(point, prev, next);
        self.nodes[prev].next = slot;
        self.nodes[next].prev = slot;
        self.points_count += 1;
        slot
    }

    fn add_node_to_tail(&mut self, point: FunctionPoint) -> usize {
        self.link_before(HEAD, point)
    }

    fn unlink(&mut self, slot: usize) -> FunctionPoint {
        let FunctionNode { point, prev, next } = self.nodes[slot].clone();
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[slot].prev = slot;
        self.nodes[slot].next = slot;
        self.free_slots.push(slot);
        self.points_count -= 1;
        point
    }
}

impl Default for LinkedListTabulatedFunction {
    fn default() -> LinkedListTabulatedFunction {
        LinkedListTabulatedFunction::new()
    }
}

impl Function for LinkedListTabulatedFunction {
    fn left_domain_border(&self) -> f64 {
        if self.points_count == 0 {
            return f64::NAN;
        }
        self.nodes[self.nodes[HEAD].next].point.x()
    }

    fn right_domain_border(&self) -> f64 {
        if self.points_count == 0 {
            return f64::NAN;
        }
        self.nodes[self.nodes[HEAD].prev].point.x()
    }

    fn value(&self, x: f64) -> f64 {
        if self.points_count == 0 || !in_domain(x, self.left_domain_border(), self.right_domain_border()) {
            return f64::NAN;
        }
        if self.points_count == 1 {
            return self.nodes[self.nodes[HEAD].next].point.y();
        }

        let mut slot = self.nodes[HEAD].next;
        while self.nodes[slot].next != HEAD {
            let lhs = self.nodes[slot].point;
            let rhs = self.nodes[self.nodes[slot].next].point;
            if x <= rhs.x() + EPSILON {
                return interpolate(lhs, rhs, x);
            }
            slot = self.nodes[slot].next;
        }
        f64::NAN
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
    fn from_points(points: &[FunctionPoint]) -> Result<LinkedListTabulatedFunction, TabulatedFunctionError> {
        check_points(points)?;
        Ok(LinkedListTabulatedFunction::from_checked_points(points))
    }

    fn with_values(left_x: f64,
                   right_x: f64,
                   values: &[f64]) -> Result<LinkedListTabulatedFunction, TabulatedFunctionError> {
        let points = equally_spaced_points(left_x, right_x, values)?;
        Ok(LinkedListTabulatedFunction::from_checked_points(&points))
    }

    fn points_count(&self) -> usize {
        self.points_count
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, TabulatedFunctionError> {
        let slot = self.node_index(index)?;
        Ok(self.nodes[slot].point)
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        let slot = self.node_index(index)?;
        let FunctionNode { point: current, prev, next } = self.nodes[slot].clone();

        if approx_eq(point.x(), current.x()) {
            self.nodes[slot].point = current.with_y(point.y());
        } else {
            check_neighbours(point.x(), self.x_of(prev), self.x_of(next))?;
            self.nodes[slot].point = point;
        }
        Ok(())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), TabulatedFunctionError> {
        let slot = self.node_index(index)?;
        let FunctionNode { point: current, prev, next } = self.nodes[slot].clone();
        if approx_eq(x, current.x()) {
            return Ok(());
        }

        check_neighbours(x, self.x_of(prev), self.x_of(next))?;
        self.nodes[slot].point = current.with_x(x);
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError> {
        let slot = self.node_index(index)?;
        self.nodes[slot].point = self.nodes[slot].point.with_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError> {
        if self.points_count <= 2 {
            return Err(TabulatedFunctionError::InvalidState(
                format!("cannot delete from a function with {} points, at least 2 must remain", self.points_count)
            ));
        }

        let slot = self.node_index(index)?;
        let point = self.unlink(slot);
        debug!("deleted point {} at index {}", point, index);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        let x = point.x();
        check_finite(x)?;
        if self.points_count == 0 {
            self.add_node_to_tail(point);
            return Ok(());
        }

        if strictly_ascending(x, self.left_domain_border()) {
            debug!("adding point {} at the front", point);
            self.link_before(self.nodes[HEAD].next, point);
            return Ok(());
        }
        if strictly_ascending(self.right_domain_border(), x) {
            debug!("adding point {} at the tail", point);
            self.add_node_to_tail(point);
            return Ok(());
        }

        // Everything before `slot` is strictly left of x; `slot` itself must
        // be strictly right of it.
        let mut index = 0;
        let mut slot = self.nodes[HEAD].next;
        while slot != HEAD && strictly_ascending(self.nodes[slot].point.x(), x) {
            slot = self.nodes[slot].next;
            index += 1;
        }

        if let Some(next_x) = self.x_of(slot) {
            if !strictly_ascending(x, next_x) {
                return Err(TabulatedFunctionError::invalid_point(x, PointBound::Duplicate(next_x)));
            }
        }

        debug!("adding point {} at index {}", point, index);
        self.link_before(slot, point);
        Ok(())
    }

    fn points(&self) -> Vec<FunctionPoint> {
        self.iter().collect()
    }
}

impl PartialEq for LinkedListTabulatedFunction {
    fn eq(&self, other: &LinkedListTabulatedFunction) -> bool {
        self.points_count == other.points_count && self.iter().eq(other.iter())
    }
}

impl fmt::Display for LinkedListTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(f, "linked list", self.points_count, self.iter())
    }
}

impl From<LinkedListTabulatedFunction> for PointSequence {
    fn from(function: LinkedListTabulatedFunction) -> PointSequence {
        PointSequence::new(function.points())
    }
}

impl TryFrom<PointSequence> for LinkedListTabulatedFunction {
    type Error = TabulatedFunctionError;

    fn try_from(sequence: PointSequence) -> Result<LinkedListTabulatedFunction, TabulatedFunctionError> {
        sequence.restore()
    }
}

// ─────────────────────────────────────────────
// Iter
// ─────────────────────────────────────────────

pub struct Iter<'a> {
    nodes: &'a [FunctionNode],
    front: usize,
    back: usize,
    remaining: usize
}

impl<'a> Iterator for Iter<'a> {
    type Item = FunctionPoint;

    fn next(&mut self) -> Option<FunctionPoint> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        Some(node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<FunctionPoint> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        Some(node.point)
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a LinkedListTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
