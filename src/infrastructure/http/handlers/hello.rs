//! Hello Handler
//!
//! 固定问候语接口

/// 问候语固定内容
const HELLO_BODY: &str = "Hello, World!";

/// GET /hello - 返回固定问候语（text/plain）
pub async fn hello() -> &'static str {
    HELLO_BODY
}
