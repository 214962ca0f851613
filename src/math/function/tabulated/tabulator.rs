use log::debug;

use crate::math::function::function::Function;
use crate::math::function::tabulated::tabulatedfunction::TabulatedFunction;
use crate::math::function::tabulated::tabulatedfunctionerror::TabulatedFunctionError;
use crate::math::tolerance::EPSILON;

/// Samples `function` at `points_count` equally spaced x on `[left_x, right_x]`.
///
/// The interval must lie inside the domain of `function`.
pub fn tabulate<T, F>(function: &F,
                      left_x: f64,
                      right_x: f64,
                      points_count: usize) -> Result<T, TabulatedFunctionError> where
    T: TabulatedFunction,
    F: Function + ?Sized {
    if !(left_x < right_x) {
        return Err(TabulatedFunctionError::InvalidArgument(
            format!("left border ({}) must be less than right border ({})", left_x, right_x)
        ));
    }
    if points_count < 2 {
        return Err(TabulatedFunctionError::InvalidArgument(
            format!("at least 2 points are required, got {}", points_count)
        ));
    }
    if left_x < function.left_domain_border() - EPSILON || right_x > function.right_domain_border() + EPSILON {
        return Err(TabulatedFunctionError::InvalidArgument(
            format!("[{}, {}] is outside the function domain [{}, {}]",
                    left_x, right_x, function.left_domain_border(), function.right_domain_border())
        ));
    }

    let step = (right_x - left_x) / (points_count - 1) as f64;
    let values: Vec<f64> = (0..points_count)
        .map(|i| function.value(left_x + i as f64 * step))
        .collect();

    debug!("tabulated {} points on [{}, {}]", points_count, left_x, right_x);
    T::with_values(left_x, right_x, &values)
}
