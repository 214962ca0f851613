use std::rc::Rc;

/// A real function of one variable defined on `[left_domain_border, right_domain_border]`.
pub trait Function {
    fn left_domain_border(&self) -> f64;

    fn right_domain_border(&self) -> f64;

    /// Value at `x`, NaN where the function is undefined.
    fn value(&self, x: f64) -> f64;
}

impl<F> Function for &F where
    F: Function + ?Sized {
    fn left_domain_border(&self) -> f64 {
        (**self).left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        (**self).right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

impl<F> Function for Box<F> where
    F: Function + ?Sized {
    fn left_domain_border(&self) -> f64 {
        self.as_ref().left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.as_ref().right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        self.as_ref().value(x)
    }
}

impl<F> Function for Rc<F> where
    F: Function + ?Sized {
    fn left_domain_border(&self) -> f64 {
        self.as_ref().left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.as_ref().right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        self.as_ref().value(x)
    }
}
