mod route;
mod route_id;
mod route_kind;
mod stop;
mod stop_id;

pub use route::Route;
pub use route_id::RouteId;
pub use route_kind::RouteKind;
pub use stop::Stop;
pub use stop_id::StopId;
