//! HTTP 处理器模块

pub mod auth;
pub mod category;
pub mod health;
pub mod product;
pub mod user;
