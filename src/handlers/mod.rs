// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (JWT auth). The tier decides which routes get
// the bearer-token middleware in `app::router`.
pub mod protected; // JWT required: POST /courses, GET /leads
pub mod public;    // No auth: GET /, GET /courses
