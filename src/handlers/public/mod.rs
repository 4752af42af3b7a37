// handlers/public/mod.rs - Public handlers (no authentication)
mod courses;
mod home;

pub use courses::courses_list;
pub use home::home;
