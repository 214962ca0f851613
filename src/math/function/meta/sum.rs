use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::function::Function;

/// `lhs(x) + rhs(x)` on the intersection of both domains.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sum<F, G> {
    lhs: F,
    rhs: G
}

impl<F, G> Sum<F, G> {
    pub fn new(lhs: F, rhs: G) -> Sum<F, G> {
        Sum { lhs, rhs }
    }

    pub fn lhs(&self) -> &F {
        &self.lhs
    }

    pub fn rhs(&self) -> &G {
        &self.rhs
    }
}

impl<F, G> Function for Sum<F, G> where
    F: Function,
    G: Function {
    fn left_domain_border(&self) -> f64 {
        self.lhs.left_domain_border().max(self.rhs.left_domain_border())
    }

    fn right_domain_border(&self) -> f64 {
        self.lhs.right_domain_border().min(self.rhs.right_domain_border())
    }

    fn value(&self, x: f64) -> f64 {
        self.lhs.value(x) + self.rhs.value(x)
    }
}
