use crate::math::function::function::Function;
use crate::math::function::meta::composition::Composition;
use crate::math::function::meta::power::Power;
use crate::math::function::meta::sum::Sum;

pub fn sum<F, G>(lhs: F, rhs: G) -> Sum<F, G> where
    F: Function,
    G: Function {
    Sum::new(lhs, rhs)
}

pub fn power<F>(base: F, exponent: f64) -> Power<F> where
    F: Function {
    Power::new(base, exponent)
}

/// `g` then `f`, i.e. `f(g(x))`.
pub fn composition<F, G>(f: F, g: G) -> Composition<F, G> where
    F: Function,
    G: Function {
    Composition::new(f, g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::function::basic::exp::Exp;
    use crate::math::function::basic::log::Log;
    use crate::math::function::basic::trigonometric::{
        Cos,
        Sin
    };

    #[test]
    fn pythagorean_identity() {
        let one = sum(power(Sin, 2.0), power(Cos, 2.0));
        for i in 0..32 {
            let x = i as f64 * 0.1;
            assert!((one.value(x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn composition_applies_inner_first() {
        let identity = composition(Exp, Log::natural());
        assert!((identity.value(5.0) - 5.0).abs() < 1e-12);
        assert_eq!(identity.left_domain_border(), 0.0);
        assert_eq!(identity.right_domain_border(), f64::INFINITY);
    }

    #[test]
    fn sum_domain_is_intersection() {
        let f = sum(Sin, Log::new(2.0));
        assert_eq!(f.left_domain_border(), 0.0);
        assert_eq!(f.right_domain_border(), f64::INFINITY);
    }

    #[test]
    fn combinators_accept_borrowed_functions() {
        let sin = Sin;
        let twice = sum(&sin, &sin);
        assert!((twice.value(1.0) - 2.0 * 1.0_f64.sin()).abs() < 1e-15);
    }
}
