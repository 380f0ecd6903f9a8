use super::{RoutingSettings, SerializationSettings};
use crate::app::AppError;
use serde::{Deserialize, Serialize};

/// defaults for a busnet run. settings present in a request document take
/// precedence over the ones found here.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct BusnetConfiguration {
    pub routing_settings: Option<RoutingSettings>,
    pub serialization_settings: Option<SerializationSettings>,
}

impl TryFrom<&String> for BusnetConfiguration {
    type Error = AppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(AppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
