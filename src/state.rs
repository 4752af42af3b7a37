use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::database::Store;

/// Process-wide context, built once at startup and cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub verifier: TokenVerifier,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, jwt_secret: &str) -> Self {
        Self {
            store,
            verifier: TokenVerifier::new(jwt_secret),
        }
    }
}
