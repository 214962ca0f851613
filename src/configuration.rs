use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::rc::Rc;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::function::tabulated::tabulatedfunction::TabulatedFunction;
use crate::math::function::tabulated::tabulatedfunctionmanager::TabulatedFunctionManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    tabulated_function: Vec<serde_json::Value>
}

pub struct Configuration {
    tabulated_function_manager_cell: RefCell<Manager<Rc<dyn TabulatedFunction>>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            tabulated_function_manager_cell: RefCell::new(TabulatedFunctionManager::new())
        }
    }

    pub fn tabulated_function_manager(&self) -> RefMut<'_, Manager<Rc<dyn TabulatedFunction>>> {
        self.tabulated_function_manager_cell.borrow_mut()
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path).map_err(ManagerError::IOError)?;
        self.from_json_reader(BufReader::new(file))
    }

    pub fn from_json_reader<R>(&self, reader: R) -> Result<(), ManagerError> where
        R: Read {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader).map_err(ManagerError::JsonParseError)?;
        let tabulated_function_manager = self.tabulated_function_manager_cell.borrow_mut();
        tabulated_function_manager.insert_obj_from_json_vec(&json_prop.tabulated_function)
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
