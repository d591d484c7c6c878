//! The contact form is embedded in a static site served from another origin.

use axum::Router;
use tower_http::cors::CorsLayer;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(CorsLayer::permissive())
}
