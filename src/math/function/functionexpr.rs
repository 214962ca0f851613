use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::basic::exp::Exp;
use crate::math::function::basic::log::Log;
use crate::math::function::basic::trigonometric::{
    Cos,
    Sin
};
use crate::math::function::function::Function;
use crate::math::function::meta::composition::Composition;
use crate::math::function::meta::power::Power;
use crate::math::function::meta::sum::Sum;
use crate::math::function::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;

/// A function tree that can be persisted.
///
/// Each node is written as an object whose `"type"` field names the node,
/// with its children nested recursively:
///
/// ```json
/// { "type": "composition",
///   "outer": { "type": "exp" },
///   "inner": { "type": "log", "base": 2.718281828459045 } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FunctionExpr {
    Sin,
    Cos,
    Exp,
    Log(Log),
    Sum(Sum<Box<FunctionExpr>, Box<FunctionExpr>>),
    Power(Power<Box<FunctionExpr>>),
    Composition(Composition<Box<FunctionExpr>, Box<FunctionExpr>>),
    Tabulated(LinkedListTabulatedFunction)
}

impl FunctionExpr {
    pub fn sum(lhs: FunctionExpr, rhs: FunctionExpr) -> FunctionExpr {
        FunctionExpr::Sum(Sum::new(Box::new(lhs), Box::new(rhs)))
    }

    pub fn power(base: FunctionExpr, exponent: f64) -> FunctionExpr {
        FunctionExpr::Power(Power::new(Box::new(base), exponent))
    }

    /// `inner` then `outer`.
    pub fn composition(outer: FunctionExpr, inner: FunctionExpr) -> FunctionExpr {
        FunctionExpr::Composition(Composition::new(Box::new(outer), Box::new(inner)))
    }

    fn as_function(&self) -> &dyn Function {
        match self {
            FunctionExpr::Sin => &Sin,
            FunctionExpr::Cos => &Cos,
            FunctionExpr::Exp => &Exp,
            FunctionExpr::Log(log) => log,
            FunctionExpr::Sum(sum) => sum,
            FunctionExpr::Power(power) => power,
            FunctionExpr::Composition(composition) => composition,
            FunctionExpr::Tabulated(tabulated) => tabulated
        }
    }
}

impl Function for FunctionExpr {
    fn left_domain_border(&self) -> f64 {
        self.as_function().left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.as_function().right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        self.as_function().value(x)
    }
}

impl From<Log> for FunctionExpr {
    fn from(log: Log) -> FunctionExpr {
        FunctionExpr::Log(log)
    }
}

impl From<LinkedListTabulatedFunction> for FunctionExpr {
    fn from(function: LinkedListTabulatedFunction) -> FunctionExpr {
        FunctionExpr::Tabulated(function)
    }
}
