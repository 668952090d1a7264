//! Route definitions for the `/trips` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::trips;
use crate::state::AppState;

/// Routes mounted at `/trips`.
///
/// ```text
/// GET    /                -> list_trips
/// POST   /                -> create_trip
/// GET    /stats/summary   -> trip_stats
/// GET    /{id}            -> get_trip
/// PUT    /{id}            -> update_trip
/// DELETE /{id}            -> delete_trip
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trips::list_trips).post(trips::create_trip))
        .route("/stats/summary", get(trips::trip_stats))
        .route(
            "/{id}",
            get(trips::get_trip)
                .put(trips::update_trip)
                .delete(trips::delete_trip),
        )
}
