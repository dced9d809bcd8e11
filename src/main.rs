use std::sync::Arc;

use tower_http::cors::CorsLayer;

use mediq_backend::routes;
use mediq_backend::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let state = Arc::new(AppState::from_env());

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .unwrap();

    tracing::info!("MedIQ backend running at http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}
