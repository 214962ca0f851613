use std::cell::{
    Ref,
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use log::info;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name).map_or(
            Err(ManagerError::map_elem_not_found(name)),
            |elem| Ok(elem.clone())
        )
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path).map_err(ManagerError::IOError)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader).map_err(ManagerError::JsonParseError)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }

    pub fn names(&self) -> Vec<String> {
        let map: Ref<'_, HashMap<String, V>> = self.map_cell.borrow();
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();
        names
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        info!("registered '{}'", named_object.name());
        self.map().insert(named_object.name().to_owned(), v);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize)]
    struct ScaleJsonProp {
        factor: f64
    }

    fn get_scale_from_json(json_value: serde_json::Value) -> Result<f64, ManagerError> {
        let json_prop: ScaleJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        Ok(json_prop.factor)
    }

    fn write_scratch(file_name: &str, content: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("tabfunc-manager-{}-{}", std::process::id(), file_name));
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn later_entries_replace_earlier_ones() {
        let manager = Manager::new(get_scale_from_json);
        manager.insert_obj_from_json_vec(&[
            json!({ "name": "half", "factor": 0.5 }),
            json!({ "name": "double", "factor": 2.0 }),
            json!({ "name": "half", "factor": 0.25 })
        ]).unwrap();
        assert_eq!(manager.get("half").unwrap(), 0.25);
        assert_eq!(manager.names(), vec!["double".to_owned(), "half".to_owned()]);
    }

    #[test]
    fn entries_without_a_name_are_rejected() {
        let manager = Manager::new(get_scale_from_json);
        let result = manager.insert_obj_from_json(json!({ "factor": 1.0 }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
        assert!(manager.names().is_empty());
    }

    #[test]
    fn reads_single_objects_and_arrays_from_files() {
        let manager = Manager::new(get_scale_from_json);
        let single = write_scratch("single.json", r#"{ "name": "unit", "factor": 1.0 }"#);
        let array = write_scratch("array.json", r#"[{ "name": "a", "factor": 3.0 }, { "name": "b", "factor": 4.0 }]"#);

        manager.from_reader(&single).unwrap();
        manager.from_reader(&array).unwrap();
        std::fs::remove_file(&single).unwrap();
        std::fs::remove_file(&array).unwrap();

        assert_eq!(manager.names(), vec!["a".to_owned(), "b".to_owned(), "unit".to_owned()]);
        assert!(matches!(manager.from_reader(&single), Err(ManagerError::IOError(_))));
    }
}
