//! 定位记录编辑工具库
//! 
//! 提供 {x, y, floor} 记录文件的加载、输入校验和保存功能
//! 遵循MVVM架构模式：model 负责数据与存储，vm 负责表单绑定

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::data_core::{AppError, RecordStore};
pub use model::record::{Field, LocationRecord};
pub use vm::controller::{FormController, FormView, SaveOutcome};
