use axum::{routing::post, Router};
use reqwest::Client;
use tower_http::cors::CorsLayer;

use crate::handlers::analyze_handlers::analyze_article;

pub fn create_router(client: Client) -> Router {
    let cors = create_cors_layer();

    Router::new()
        .route("/analyze", post(analyze_article))
        .with_state(client)
        .layer(cors)
}

fn create_cors_layer() -> CorsLayer {
    // Mirrors any origin/method/header and allows credentials.
    // TODO: lock this down to the real frontend origin before deploying
    //       anywhere public
    CorsLayer::very_permissive()
}
