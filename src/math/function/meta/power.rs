use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::function::Function;

/// `base(x)^exponent`, defined wherever `base` is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Power<F> {
    base: F,
    exponent: f64
}

impl<F> Power<F> {
    pub fn new(base: F, exponent: f64) -> Power<F> {
        Power { base, exponent }
    }

    pub fn base(&self) -> &F {
        &self.base
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl<F> Function for Power<F> where
    F: Function {
    fn left_domain_border(&self) -> f64 {
        self.base.left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.base.right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        self.base.value(x).powf(self.exponent)
    }
}
