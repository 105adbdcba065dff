pub mod contact;
pub mod health;
pub mod resume;

use axum::{
    handler::Handler,
    http::Method,
    routing::{get, post},
    Router,
};

use crate::contract::{self, Endpoint};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new().route("/health", get(health::health_handler));
    let router = route(router, contract::PROFILE_GET, resume::handle_get_profile);
    let router = route(router, contract::SKILLS_LIST, resume::handle_list_skills);
    let router = route(router, contract::EXPERIENCE_LIST, resume::handle_list_experience);
    let router = route(router, contract::PROJECTS_LIST, resume::handle_list_projects);
    let router = route(router, contract::EDUCATION_LIST, resume::handle_list_education);
    let router = route(router, contract::CONTACT_SUBMIT, contact::handle_submit_contact);
    router.with_state(state)
}

/// Mounts a handler at the method and path its contract entry declares.
fn route<H, T>(router: Router<AppState>, endpoint: Endpoint, handler: H) -> Router<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    let method_router = if endpoint.method == Method::POST {
        post(handler)
    } else {
        get(handler)
    };
    router.route(endpoint.path, method_router)
}
