use super::handlers::{
    create_department::{__path_create_department, create_department},
    delete_department::{__path_delete_department, delete_department},
    get_department::{__path_get_department, get_department},
    get_department_products::{__path_get_department_products, get_department_products},
    get_departments::{__path_get_departments, get_departments},
    update_department::{__path_update_department, update_department},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_departments,
    get_department,
    get_department_products,
    create_department,
    update_department,
    delete_department
))]
pub struct DepartmentApiDoc;

pub fn department_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/departments", root_path),
            get(get_departments).post(create_department),
        )
        .route(
            &format!("{}/departments/{{id}}", root_path),
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .route(
            &format!("{}/departments/{{id}}/products", root_path),
            get(get_department_products),
        )
}
