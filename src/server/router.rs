//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI specification. Routes other than
//! login sit behind the [`require_user`] middleware, and Swagger UI is served at `/api/docs`.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, util::session::require_user},
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login`, `POST /api/auth/logout`, `GET /api/auth/user`
/// - `/api/device-types`, `/api/projects`, `/api/deployments` CRUD
/// - `/api/deployments/{id}/allocations` (list, batch save, bulk, regenerate), `PUT /api/allocations/{id}`
/// - `GET /api/fleet/usage`, `/api/fleet/current-week`, `/api/fleet/forecast`, `/api/fleet/active`
/// - `GET /api/dashboard`, `GET /api/timeline`
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
///
/// # Returns
/// A `Router<AppState>` that still needs its state and the session layer.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Fleet Scheduler", description = "Fleet Scheduler API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::device_type::DEVICE_TYPE_TAG, description = "Device type API routes"),
        (name = controller::project::PROJECT_TAG, description = "Project API routes"),
        (name = controller::deployment::DEPLOYMENT_TAG, description = "Deployment API routes"),
        (name = controller::allocation::ALLOCATION_TAG, description = "Weekly allocation API routes"),
        (name = controller::fleet::FLEET_TAG, description = "Fleet usage, dashboard and timeline API routes"),
    ))]
    struct ApiDoc;

    let (public, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .split_for_parts();

    let (protected, protected_api) = OpenApiRouter::new()
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::device_type::list_device_types,
            controller::device_type::create_device_type
        ))
        .routes(routes!(
            controller::device_type::get_device_type,
            controller::device_type::update_device_type,
            controller::device_type::delete_device_type
        ))
        .routes(routes!(
            controller::project::list_projects,
            controller::project::create_project
        ))
        .routes(routes!(
            controller::project::get_project,
            controller::project::update_project,
            controller::project::delete_project
        ))
        .routes(routes!(
            controller::deployment::list_deployments,
            controller::deployment::create_deployment
        ))
        .routes(routes!(
            controller::deployment::get_deployment,
            controller::deployment::update_deployment,
            controller::deployment::delete_deployment
        ))
        .routes(routes!(
            controller::allocation::list_allocations,
            controller::allocation::save_allocations
        ))
        .routes(routes!(controller::allocation::bulk_update_allocations))
        .routes(routes!(controller::allocation::regenerate_allocations))
        .routes(routes!(controller::allocation::update_allocation))
        .routes(routes!(controller::fleet::get_usage))
        .routes(routes!(controller::fleet::get_current_week))
        .routes(routes!(controller::fleet::get_forecast))
        .routes(routes!(controller::fleet::get_active_deployments))
        .routes(routes!(controller::fleet::get_dashboard))
        .routes(routes!(controller::fleet::get_timeline))
        .split_for_parts();

    api.merge(protected_api);

    public
        .merge(protected.route_layer(middleware::from_fn(require_user)))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
