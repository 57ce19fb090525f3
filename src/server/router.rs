//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and Swagger
//! UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in the same `routes!` call so that they resolve to
/// a single method router.
///
/// # Registered Endpoints
/// - `GET | POST /api/passengers`
/// - `PUT | DELETE /api/passengers/{id}`
/// - `GET /api/aircraft`
/// - `GET | POST /api/aircraft-ownerships`
/// - `PUT | DELETE /api/aircraft-ownerships/{aeronave_id}/{companhia_id}`
/// - `GET /api/airports`
/// - `GET | POST /api/connections`
/// - `PUT | DELETE /api/connections/{origem_id}/{destino_id}`
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Hangar", description = "Hangar aviation API"), tags(
        (name = controller::passenger::PASSENGER_TAG, description = "Passenger registration"),
        (name = controller::aircraft::AIRCRAFT_TAG, description = "Aircraft catalogue"),
        (name = controller::aircraft_ownership::AIRCRAFT_OWNERSHIP_TAG, description = "Aircraft ownership by company"),
        (name = controller::airport::AIRPORT_TAG, description = "Airport catalogue"),
        (name = controller::connection::CONNECTION_TAG, description = "Flight connections between airports"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::passenger::list_passengers,
            controller::passenger::create_passenger
        ))
        .routes(routes!(
            controller::passenger::update_passenger,
            controller::passenger::delete_passenger
        ))
        .routes(routes!(controller::aircraft::list_aircraft))
        .routes(routes!(
            controller::aircraft_ownership::list_ownerships,
            controller::aircraft_ownership::create_ownership
        ))
        .routes(routes!(
            controller::aircraft_ownership::update_ownership,
            controller::aircraft_ownership::delete_ownership
        ))
        .routes(routes!(controller::airport::list_airports))
        .routes(routes!(
            controller::connection::list_connections,
            controller::connection::create_connection
        ))
        .routes(routes!(
            controller::connection::update_connection,
            controller::connection::delete_connection
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
