pub mod route;
pub mod route_id;
#[allow(clippy::module_inception)]
pub mod solution;
