use std::fmt;

use log::debug;
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

/// Tabulated function over a contiguous vector; lookups are binary searches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "PointSequence", try_from = "PointSequence")]
pub struct ArrayTabulatedFunction {
    points: Vec<FunctionPoint>
}

impl ArrayTabulatedFunction {
    pub fn new() -> ArrayTabulatedFunction {
        ArrayTabulatedFunction { points: Vec::new() }
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, FunctionPoint>> {
        self.points.iter().copied()
    }

    pub fn as_slice(&self) -> &[FunctionPoint] {
        &self.points
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Inserts `point` at `index` (up to the current count), provided it
    /// fits between its new neighbours.
    pub fn insert_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        if index > self.points.len() {
            return Err(TabulatedFunctionError::index_out_of_range(index, self.points.len() as isize));
        }

        let previous_x = index.checked_sub(1).map(|i| self.points[i].x());
        let next_x = self.points.get(index).map(|point| point.x());
        check_neighbours(point.x(), previous_x, next_x)?;

        self.points.insert(index, point);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), TabulatedFunctionError> {
        if index >= self.points.len() {
            return Err(TabulatedFunctionError::index_out_of_range(index, self.points.len() as isize - 1));
        }
        Ok(())
    }

    fn neighbours_x(&self, index: usize) -> (Option<f64>, Option<f64>) {
        let previous_x = index.checked_sub(1).map(|i| self.points[i].x());
        let next_x = self.points.get(index + 1).map(|point| point.x());
        (previous_x, next_x)
    }
}

impl Function for ArrayTabulatedFunction {
    fn left_domain_border(&self) -> f64 {
        self.points.first().map_or(f64::NAN, |point| point.x())
    }

    fn right_domain_border(&self) -> f64 {
        self.points.last().map_or(f64::NAN, |point| point.x())
    }

    fn value(&self, x: f64) -> f64 {
        let n = self.points.len();
        if n == 0 || !in_domain(x, self.left_domain_border(), self.right_domain_border()) {
            return f64::NAN;
        }
        if n == 1 {
            return self.points[0].y();
        }

        // Same bracket a left-to-right scan would stop at: the first pair
        // whose right end is not left of x.
        let i = self.points[1..]
            .partition_point(|point| point.x() + EPSILON < x)
            .min(n - 2);
        interpolate(self.points[i], self.points[i + 1], x)
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn from_points(points: &[FunctionPoint]) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        check_points(points)?;
        Ok(ArrayTabulatedFunction { points: points.to_vec() })
    }

    fn with_values(left_x: f64,
                   right_x: f64,
                   values: &[f64]) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        let points = equally_spaced_points(left_x, right_x, values)?;
        Ok(ArrayTabulatedFunction { points })
    }

    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, TabulatedFunctionError> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        self.check_index(index)?;
        let current = self.points[index];

        if approx_eq(point.x(), current.x()) {
            self.points[index] = current.with_y(point.y());
        } else {
            let (previous_x, next_x) = self.neighbours_x(index);
            check_neighbours(point.x(), previous_x, next_x)?;
            self.points[index] = point;
        }
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError> {
        self.check_index(index)?;
        self.points[index] = self.points[index].with_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError> {
        if self.points.len() <= 2 {
            return Err(TabulatedFunctionError::InvalidState(
                format!("cannot delete from a function with {} points, at least 2 must remain", self.points.len())
            ));
        }
        self.check_index(index)?;

        let point = self.points.remove(index);
        debug!("deleted point {} at index {}", point, index);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        let x = point.x();
        check_finite(x)?;

        let index = self.points.partition_point(|existing| strictly_ascending(existing.x(), x));
        if let Some(next) = self.points.get(index) {
            if !strictly_ascending(x, next.x()) {
                return Err(TabulatedFunctionError::invalid_point(x, PointBound::Duplicate(next.x())));
            }
        }

        debug!("adding point {} at index {}", point, index);
        self.points.insert(index, point);
        Ok(())
    }

    fn points(&self) -> Vec<FunctionPoint> {
        self.points.clone()
    }
}

impl fmt::Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(f, "array", self.points.len(), self.iter())
    }
}

impl From<ArrayTabulatedFunction> for PointSequence {
    fn from(function: ArrayTabulatedFunction) -> PointSequence {
        PointSequence::new(function.points)
    }
}

impl TryFrom<PointSequence> for ArrayTabulatedFunction {
    type Error = TabulatedFunctionError;

    fn try_from(sequence: PointSequence) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        sequence.restore()
    }
}
