use super::handlers::{
    create_product::{__path_create_product, create_product},
    delete_product::{__path_delete_product, delete_product},
    get_brands::{__path_get_brands, get_brands},
    get_categories::{__path_get_categories, get_categories},
    get_product::{__path_get_product, get_product},
    get_products::{__path_get_products, get_products},
    get_search_suggestions::{__path_get_search_suggestions, get_search_suggestions},
    update_product::{__path_update_product, update_product},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::get,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_products,
    get_product,
    create_product,
    update_product,
    delete_product,
    get_categories,
    get_brands,
    get_search_suggestions
))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/products", root_path),
            get(get_products).post(create_product),
        )
        .route(
            &format!("{}/products/{{id}}", root_path),
            get(get_product).put(update_product).delete(delete_product),
        )
        .route(
            &format!("{}/products/categories/list", root_path),
            get(get_categories),
        )
        .route(
            &format!("{}/products/brands/list", root_path),
            get(get_brands),
        )
        .route(
            &format!("{}/products/search/suggestions", root_path),
            get(get_search_suggestions),
        )
}
