mod busnet_configuration;
mod routing_settings;
mod serialization_settings;

pub use busnet_configuration::BusnetConfiguration;
pub use routing_settings::RoutingSettings;
pub use serialization_settings::SerializationSettings;
