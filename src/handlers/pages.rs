use axum::response::Response;

use crate::handlers::helpers::render_template;
use crate::templates::InstancesPageTemplate;

/// GET / — the dashboard shell; the table itself is filled in by the page
/// script from /api/instances.
pub async fn index_get() -> Response {
    render_template(InstancesPageTemplate)
}
