pub mod config;
pub mod edit_guard;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;
pub mod reorder;
pub mod repo;
pub mod services;
pub mod state;
pub mod store;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Board routes
        .route(
            "/boards",
            get(handlers::boards::list_boards).post(handlers::boards::create_board),
        )
        .route(
            "/boards/{board_id}",
            get(handlers::boards::get_board)
                .put(handlers::boards::update_board)
                .delete(handlers::boards::delete_board),
        )
        .route(
            "/boards/{board_id}/stats",
            get(handlers::boards::board_stats),
        )
        .route(
            "/current-board",
            get(handlers::boards::get_current_board).put(handlers::boards::set_current_board),
        )
        // Column routes
        .route(
            "/boards/{board_id}/columns",
            post(handlers::columns::create_column),
        )
        .route(
            "/boards/{board_id}/columns/{column_id}",
            put(handlers::columns::update_column).delete(handlers::columns::delete_column),
        )
        .route(
            "/boards/{board_id}/move-column",
            patch(handlers::columns::move_column),
        )
        // Card routes
        .route(
            "/boards/{board_id}/columns/{column_id}/cards",
            post(handlers::cards::create_card),
        )
        .route(
            "/boards/{board_id}/cards/{card_id}",
            get(handlers::cards::get_card)
                .put(handlers::cards::update_card)
                .delete(handlers::cards::delete_card),
        )
        .route(
            "/boards/{board_id}/cards/{card_id}/move",
            patch(handlers::cards::move_card),
        )
        // Comment routes
        .route(
            "/boards/{board_id}/cards/{card_id}/comments",
            post(handlers::comments::add_comment),
        )
        .route(
            "/boards/{board_id}/cards/{card_id}/comments/{comment_id}",
            put(handlers::comments::update_comment).delete(handlers::comments::delete_comment),
        )
        // Tag routes
        .route(
            "/tags",
            get(handlers::tags::list_tags).post(handlers::tags::create_tag),
        )
        .route(
            "/tags/{tag_id}",
            put(handlers::tags::update_tag).delete(handlers::tags::delete_tag),
        )
        // Backup routes
        .route("/data", delete(handlers::data::clear_data))
        .route("/data/export", get(handlers::data::export_data))
        .route("/data/import", post(handlers::data::import_data))
        .route("/data/usage", get(handlers::data::storage_usage));

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub mod test_utils {
    use std::sync::Arc;

    use crate::repo::MemoryStorage;
    use crate::state::AppState;

    /// State over fresh in-memory storage, seeded with the default board.
    pub fn create_test_state() -> AppState {
        create_test_state_with(Arc::new(MemoryStorage::new()))
    }

    pub fn create_test_state_with(storage: Arc<MemoryStorage>) -> AppState {
        AppState::load(storage).expect("Failed to load test state")
    }
}
