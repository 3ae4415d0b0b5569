// Core gateway logic exports
pub mod routing;
pub mod validation;

pub use routing::{route_table, InferenceRequest, RouteEntry, RouteKind};
pub use validation::validate_request;
