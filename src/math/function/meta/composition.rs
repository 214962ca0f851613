use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::function::Function;

/// `outer(inner(x))`: `inner` is applied first. The domain is the inner one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Composition<F, G> {
    outer: F,
    inner: G
}

impl<F, G> Composition<F, G> {
    pub fn new(outer: F, inner: G) -> Composition<F, G> {
        Composition { outer, inner }
    }

    pub fn outer(&self) -> &F {
        &self.outer
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<F, G> Function for Composition<F, G> where
    F: Function,
    G: Function {
    fn left_domain_border(&self) -> f64 {
        self.inner.left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.inner.right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        self.outer.value(self.inner.value(x))
    }
}
