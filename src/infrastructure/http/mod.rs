//! HTTP Layer - RESTful API
//!
//! axum 路由、处理器、中间件与服务器封装

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
