//! IO helper: safe file read/write for JSON

use std::{fs::File, io::BufReader, path::Path};

use serde::{de::DeserializeOwned, Serialize};
use crate::model::data_core::AppError;

/// 从文件读取JSON数据并反序列化为目标类型
pub fn read_json_file<T: DeserializeOwned>(p: &Path) -> Result<T, AppError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    // 读取阶段的IO错误（如目标是目录）仍归为IO失败
    let v: T = serde_json::from_reader(rdr).map_err(|e| {
        if e.is_io() {
            AppError::Io(e.into())
        } else {
            AppError::Parse(e)
        }
    })?;
    Ok(v)
}

/// 将数据保存到文件（格式化输出，两空格缩进，整体覆盖）
pub fn write_json_file<T: Serialize>(p: &Path, value: &T) -> Result<(), AppError> {
    let f = File::create(p)?;
    serde_json::to_writer_pretty(f, value)?;
    Ok(())
}
