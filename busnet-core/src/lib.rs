pub mod algorithm;
pub mod model;
