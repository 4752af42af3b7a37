use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Full application: routes plus the global CORS and tracing layers
pub fn app(state: AppState, enable_cors: bool) -> Router {
    let router = router(state).layer(TraceLayer::new_for_http());

    if enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Route table. Auth runs before body extraction, so a rejected token never
/// reaches validation or the store.
pub fn router(state: AppState) -> Router {
    let auth = from_fn_with_state(state.clone(), jwt_auth_middleware);

    Router::new()
        // Public
        .route("/", get(public::home))
        // GET is public, POST needs a token
        .route(
            "/courses",
            get(public::courses_list).merge(post(protected::courses_create).route_layer(auth.clone())),
        )
        // Protected
        .route("/leads", get(protected::leads_list).route_layer(auth))
        .with_state(state)
}
