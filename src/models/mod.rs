//! 数据模型模块
//! 用户、商品、分类以及认证相关的请求/响应模型

pub mod auth;
pub mod category;
pub mod product;
pub mod user;
