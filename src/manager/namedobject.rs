use serde::{
    Serialize,
    Deserialize
};

/// The `name` every managed JSON entry carries.
#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
