//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{config::CorsConfig, handlers, middleware::AppState};

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查、首页）
    let public_routes = Router::new()
        .route("/", get(handlers::auth::index))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // 会话端点 + 注册（无需认证）
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/create/users", post(handlers::user::create_user));

    // 商品与分类
    let catalog_routes = Router::new()
        .route(
            "/category",
            get(handlers::category::list_categories).post(handlers::category::create_category),
        )
        .route(
            "/category/{id}",
            get(handlers::category::get_category)
                .put(handlers::category::update_category)
                .delete(handlers::category::delete_category),
        )
        .route(
            "/products",
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
        .route(
            "/products/category/{category_id}",
            get(handlers::product::list_products_by_category),
        );

    // 需要会话的路由
    let authenticated_routes = Router::new()
        .route("/dashboard", get(handlers::auth::dashboard))
        .route("/dashboard/verify-session", get(handlers::auth::verify_session))
        .route("/users", get(handlers::user::list_users))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/update/users/{id}", put(handlers::user::update_user))
        .route("/delete/users/{id}", delete(handlers::user::delete_user))
        .route_layer(axum::middleware::from_fn_with_state(
            state.session_resolver.clone(),
            crate::auth::middleware::session_auth_middleware,
        ));

    // 组合所有路由
    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(catalog_routes)
        .merge(authenticated_routes)
        .layer(cors_layer(&state.config.cors))
        .layer(axum::middleware::from_fn(crate::middleware::request_tracking_middleware))
        .with_state(state)
}

/// CORS：只允许配置中的前端来源，并允许携带 Cookie
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
