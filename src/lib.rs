//! 电商后台管理服务库
//! 用户、商品、分类的 REST API 与基于 Cookie 的会话认证

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod telemetry;
