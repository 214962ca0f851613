use std::rc::Rc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::function::functionexpr::FunctionExpr;
use crate::math::function::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::math::function::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use crate::math::function::tabulated::tabulatedfunction::TabulatedFunction;
use crate::math::function::tabulated::tabulator::tabulate;

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    #[default]
    LinkedList,
    Array
}


#[derive(Deserialize)]
struct TabulatedFunctionJsonProp {
    function: FunctionExpr,
    left_x: f64,
    right_x: f64,
    points_count: usize,
    #[serde(default)]
    representation: Representation
}


fn get_tabulated_function_from_json(json_value: serde_json::Value) -> Result<Rc<dyn TabulatedFunction>, ManagerError> {
    let json_prop: TabulatedFunctionJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let function: Rc<dyn TabulatedFunction> = match json_prop.representation {
        Representation::LinkedList => {
            let tabulated: LinkedListTabulatedFunction = tabulate(
                &json_prop.function,
                json_prop.left_x,
                json_prop.right_x,
                json_prop.points_count)?;
            Rc::new(tabulated)
        },
        Representation::Array => {
            let tabulated: ArrayTabulatedFunction = tabulate(
                &json_prop.function,
                json_prop.left_x,
                json_prop.right_x,
                json_prop.points_count)?;
            Rc::new(tabulated)
        }
    };
    Ok(function)
}


pub struct TabulatedFunctionManager;


impl TabulatedFunctionManager {
    pub fn new() -> Manager<Rc<dyn TabulatedFunction>> {
        Manager::new(get_tabulated_function_from_json)
    }
}
