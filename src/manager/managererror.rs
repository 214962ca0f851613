use std::fmt::Display;

use serde::Deserialize;

use crate::math::function::tabulated::tabulatedfunctionerror::TabulatedFunctionError;

#[derive(Debug)]
pub enum ManagerError {
    IOError(std::io::Error),
    JsonParseError(serde_json::Error),
    NameNotFoundError(String),
    TabulationError(TabulatedFunctionError)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error <T> (json_value: serde_json::Value) -> Result<T, Self>
        where T : for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}

impl Display for ManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManagerError::IOError(error) => write!(f, "{}", error),
            ManagerError::JsonParseError(error) => write!(f, "{}", error),
            ManagerError::NameNotFoundError(name) => write!(f, "key '{}' not found", name),
            ManagerError::TabulationError(error) => write!(f, "{}", error)
        }
    }
}

impl std::error::Error for ManagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManagerError::IOError(error) => Some(error),
            ManagerError::JsonParseError(error) => Some(error),
            ManagerError::NameNotFoundError(_) => None,
            ManagerError::TabulationError(error) => Some(error)
        }
    }
}

impl From<TabulatedFunctionError> for ManagerError {
    fn from(error: TabulatedFunctionError) -> ManagerError {
        ManagerError::TabulationError(error)
    }
}
