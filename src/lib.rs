//! Sample API - 示例物品查询服务
//!
//! 架构分层:
//!
//! 领域层 (domain/):
//! - Item: 合成物品值对象，无任何存储
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum 路由、处理器、中间件、服务器封装）
//!
//! 配置层 (config/):
//! - 多来源配置加载（环境变量 > 配置文件 > 默认值）

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
