// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every handler here runs behind `jwt_auth_middleware`, so `Claims` are
// always present in the request extensions.
mod courses;
mod leads;

pub use courses::courses_create;
pub use leads::leads_list;
