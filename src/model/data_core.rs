//! RecordStore：定位记录文件的加载与保存

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::model::record::{Field, LocationRecord};
use crate::utils::fs::{read_json_file, write_json_file};
use crate::vm::bridge::RECORD_PATH;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("输入校验失败: {field} 字段 {input:?} 不是有效整数")]
    Validation { field: Field, input: String },
}

/// 记录文件的读写边界，只负责单条记录的整体读写
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(RECORD_PATH)
    }
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载记录；文件不存在时返回全零记录，且不创建文件
    pub fn load(&self) -> Result<LocationRecord, AppError> {
        // 先读成 Value：重复键按最后一次出现取值
        match read_json_file::<Value>(&self.path) {
            Ok(value) => {
                let record: LocationRecord = serde_json::from_value(value)?;
                tracing::info!(path = %self.path.display(), ?record, "记录加载完成");
                Ok(record)
            }
            Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "记录文件不存在，使用默认值");
                Ok(LocationRecord::default())
            }
            Err(e) => Err(e),
        }
    }

    /// 覆盖写入记录；不创建父目录
    pub fn save(&self, record: &LocationRecord) -> Result<(), AppError> {
        write_json_file(&self.path, record)?;
        tracing::info!(path = %self.path.display(), x = record.x, y = record.y, floor = record.floor, "记录已保存");
        Ok(())
    }
}
