pub mod manager;
pub mod models;
pub mod store;
pub mod watchdog;

pub use manager::{connect, PgStore};
pub use models::NewCourse;
pub use store::{Store, StoreError};
