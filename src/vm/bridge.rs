//! VM桥接层：连接Slint UI与记录存储
//!
//! 注意：Slint窗口对 FormView 的实现在main.rs中，因为依赖于Slint生成的类型
//! 这里只提供公共常量

// === 常量定义（消除魔法值） ===
/// 记录文件路径，相对于工作目录
pub const RECORD_PATH: &str = "./public/config/location.json";
pub const ERROR_DIALOG_TITLE: &str = "Error";
pub const VALIDATION_MESSAGE: &str = "Please enter valid integers.";
