use std::fmt;

use log::warn;
use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::function::Function;
use crate::math::function::tabulated::functionpoint::FunctionPoint;
use crate::math::function::tabulated::tabulatedfunctionerror::{
    PointBound,
    TabulatedFunctionError
};
use crate::math::tolerance::{
    approx_eq,
    strictly_ascending,
    EPSILON
};

/// A function known at finitely many points, ordered strictly by x,
/// and linearly interpolated in between.
///
/// Every successful mutation keeps consecutive x values more than
/// `EPSILON` apart. A failed mutation leaves the function untouched.
pub trait TabulatedFunction: Function {
    /// Builds a function from at least two strictly ascending points.
    fn from_points(points: &[FunctionPoint]) -> Result<Self, TabulatedFunctionError> where
        Self: Sized;

    /// Builds a function with equally spaced x on `[left_x, right_x]` and the given y values.
    fn with_values(left_x: f64,
                   right_x: f64,
                   values: &[f64]) -> Result<Self, TabulatedFunctionError> where
        Self: Sized;

    /// Equally spaced x on `[left_x, right_x]`, all y = 0.
    fn with_points_count(left_x: f64,
                         right_x: f64,
                         points_count: usize) -> Result<Self, TabulatedFunctionError> where
        Self: Sized {
        Self::with_values(left_x, right_x, &vec![0.0; points_count])
    }

    fn points_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.points_count() == 0
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, TabulatedFunctionError>;

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError>;

    fn point_x(&self, index: usize) -> Result<f64, TabulatedFunctionError> {
        self.point(index).map(|point| point.x())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), TabulatedFunctionError> {
        let point = self.point(index)?;
        if approx_eq(point.x(), x) {
            return Ok(());
        }
        self.set_point(index, point.with_x(x))
    }

    fn point_y(&self, index: usize) -> Result<f64, TabulatedFunctionError> {
        self.point(index).map(|point| point.y())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError>;

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError>;

    /// Inserts `point` at the position its x dictates.
    fn add_point(&mut self, point: FunctionPoint) -> Result<(), TabulatedFunctionError>;

    /// Copies of all points, first to last.
    fn points(&self) -> Vec<FunctionPoint>;
}

pub(crate) fn check_points(points: &[FunctionPoint]) -> Result<(), TabulatedFunctionError> {
    if points.len() < 2 {
        return Err(TabulatedFunctionError::InvalidArgument(
            format!("at least 2 points are required, got {}", points.len())
        ));
    }

    if let Some(point) = points.iter().find(|point| !point.x().is_finite()) {
        return Err(TabulatedFunctionError::InvalidArgument(
            format!("point {} has a non-finite x", point)
        ));
    }
    for (i, pair) in points.windows(2).enumerate() {
        if !strictly_ascending(pair[0].x(), pair[1].x()) {
            return Err(TabulatedFunctionError::InvalidArgument(
                format!("points are not strictly ascending by x at index {} ({} then {})",
                        i + 1, pair[0].x(), pair[1].x())
            ));
        }
    }
    Ok(())
}

/// `values.len()` points with x spread evenly over `[left_x, right_x]`.
pub(crate) fn equally_spaced_points(left_x: f64,
                                    right_x: f64,
                                    values: &[f64]) -> Result<Vec<FunctionPoint>, TabulatedFunctionError> {
    if !left_x.is_finite() || !right_x.is_finite() {
        return Err(TabulatedFunctionError::InvalidArgument(
            format!("domain borders must be finite, got [{}, {}]", left_x, right_x)
        ));
    }
    if left_x >= right_x {
        return Err(TabulatedFunctionError::InvalidArgument(
            format!("left border ({}) must be less than right border ({})", left_x, right_x)
        ));
    }
    if values.len() < 2 {
        return Err(TabulatedFunctionError::InvalidArgument(
            format!("at least 2 points are required, got {}", values.len())
        ));
    }

    let step = (right_x - left_x) / (values.len() - 1) as f64;
    let points: Vec<FunctionPoint> = values
        .iter()
        .enumerate()
        .map(|(i, &y)| FunctionPoint::new(left_x + i as f64 * step, y))
        .collect();

    // A range too narrow for the requested density collapses neighbouring x.
    check_points(&points)?;
    Ok(points)
}

pub(crate) fn check_finite(x: f64) -> Result<(), TabulatedFunctionError> {
    if !x.is_finite() {
        return Err(TabulatedFunctionError::invalid_point(x, PointBound::NotFinite));
    }
    Ok(())
}

/// Checks that `x` fits strictly between the optional neighbours.
pub(crate) fn check_neighbours(x: f64,
                               previous_x: Option<f64>,
                               next_x: Option<f64>) -> Result<(), TabulatedFunctionError> {
    check_finite(x)?;
    if let Some(previous_x) = previous_x {
        if !strictly_ascending(previous_x, x) {
            return Err(TabulatedFunctionError::invalid_point(x, PointBound::Left(previous_x)));
        }
    }
    if let Some(next_x) = next_x {
        if !strictly_ascending(x, next_x) {
            return Err(TabulatedFunctionError::invalid_point(x, PointBound::Right(next_x)));
        }
    }
    Ok(())
}

pub(crate) fn in_domain(x: f64, left_x: f64, right_x: f64) -> bool {
    x >= left_x - EPSILON && x <= right_x + EPSILON
}

/// Linear interpolation on `[lhs, rhs]`, exact at either end.
pub(crate) fn interpolate(lhs: FunctionPoint, rhs: FunctionPoint, x: f64) -> f64 {
    if approx_eq(x, lhs.x()) {
        return lhs.y();
    }
    if approx_eq(x, rhs.x()) {
        return rhs.y();
    }
    lhs.y() + (rhs.y() - lhs.y()) * (x - lhs.x()) / (rhs.x() - lhs.x())
}

/// Appends `point` at the tail, refusing anything that is not strictly
/// to the right of the current last point.
///
/// Used by every read path, so the rejection surfaces as invalid data.
pub(crate) fn append_in_order<T>(function: &mut T, point: FunctionPoint) -> Result<(), TabulatedFunctionError> where
    T: TabulatedFunction + ?Sized {
    if !point.x().is_finite() {
        warn!("rejecting non-finite x {} at index {}", point.x(), function.points_count());
        return Err(TabulatedFunctionError::invalid_data(
            format!("point {} has a non-finite x", point)
        ));
    }

    if !function.is_empty() {
        let last_x = function.right_domain_border();
        if !strictly_ascending(last_x, point.x()) {
            warn!("rejecting point {} following x = {}", point, last_x);
            return Err(TabulatedFunctionError::invalid_data(
                format!("point {} does not follow x = {} in ascending order", point, last_x)
            ));
        }
    }
    function.add_point(point)
}

/// Whole-object form used by the serde implementations of the containers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointSequence {
    count: usize,
    points: Vec<FunctionPoint>
}

impl PointSequence {
    pub fn new(points: Vec<FunctionPoint>) -> PointSequence {
        PointSequence { count: points.len(), points }
    }

    /// Rebuilds a function by appending to an empty one in sequence order.
    pub fn restore<T>(self) -> Result<T, TabulatedFunctionError> where
        T: TabulatedFunction + Default {
        if self.count != self.points.len() {
            return Err(TabulatedFunctionError::invalid_data(
                format!("count {} does not match the {} points present", self.count, self.points.len())
            ));
        }

        let mut function = T::default();
        for point in self.points {
            append_in_order(&mut function, point)?;
        }
        Ok(function)
    }
}

pub(crate) fn fmt_points<I>(f: &mut fmt::Formatter<'_>,
                            representation: &str,
                            points_count: usize,
                            points: I) -> fmt::Result where
    I: Iterator<Item = FunctionPoint> {
    writeln!(f, "tabulated function ({}, {} points):", representation, points_count)?;
    if points_count == 0 {
        return write!(f, "  no points");
    }
    for (i, point) in points.enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "  [{}]: ({:.4}, {:.4})", i, point.x(), point.y())?;
    }
    Ok(())
}
