mod app_error;
mod busnet_app;
mod operation;
mod request_document;
pub mod request_ops;
mod stat_response;

pub use app_error::AppError;
pub use busnet_app::BusnetApp;
pub use operation::BusnetOperation;
pub use request_document::{BaseRequest, RequestDocument, StatRequest};
pub use stat_response::{RouteItem, StatResponse};
