use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionPoint {
    x: f64,
    y: f64
}

impl FunctionPoint {
    pub fn new(x: f64, y: f64) -> FunctionPoint {
        FunctionPoint { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn with_x(&self, x: f64) -> FunctionPoint {
        FunctionPoint::new(x, self.y)
    }

    pub fn with_y(&self, y: f64) -> FunctionPoint {
        FunctionPoint::new(self.x, y)
    }
}

impl From<(f64, f64)> for FunctionPoint {
    fn from((x, y): (f64, f64)) -> FunctionPoint {
        FunctionPoint::new(x, y)
    }
}

impl fmt::Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
