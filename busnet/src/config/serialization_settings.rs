use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SerializationSettings {
    /// path of the persisted base
    pub file: String,
}
