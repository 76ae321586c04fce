//! FormController：三个输入框与 RecordStore 之间的绑定

use crate::model::data_core::{AppError, RecordStore};
use crate::model::form::parse_record;
use crate::model::record::{Field, LocationRecord};
use crate::vm::bridge::{ERROR_DIALOG_TITLE, VALIDATION_MESSAGE};

/// 控制器看到的界面：三个文本框加一个错误对话框
pub trait FormView {
    fn field_text(&self, field: Field) -> String;
    fn set_field_text(&mut self, field: Field, text: &str);
    /// 模态错误提示
    fn show_error(&mut self, title: &str, message: &str);
}

/// 一次保存动作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(LocationRecord),
    /// 输入校验失败，文件未改动
    Rejected,
}

pub struct FormController<V: FormView> {
    view: V,
    store: RecordStore,
    record: LocationRecord,
}

impl<V: FormView> FormController<V> {
    /// 加载记录并填充输入框
    pub fn new(mut view: V, store: RecordStore) -> Result<Self, AppError> {
        let record = store.load()?;
        for field in Field::ALL {
            view.set_field_text(field, &record.get(field).to_string());
        }
        Ok(Self { view, store, record })
    }

    /// 最近一次加载或成功保存的记录
    pub fn record(&self) -> LocationRecord {
        self.record
    }

    /// 保存动作：解析 → 校验 → 写盘
    ///
    /// 校验失败时弹出错误框并返回 `Rejected`；IO 与序列化错误向上传递。
    pub fn save(&mut self) -> Result<SaveOutcome, AppError> {
        let x = self.view.field_text(Field::X);
        let y = self.view.field_text(Field::Y);
        let floor = self.view.field_text(Field::Floor);

        let record = match parse_record(&x, &y, &floor) {
            Ok(record) => record,
            Err(e @ AppError::Validation { .. }) => {
                tracing::warn!("{}", e);
                self.view.show_error(ERROR_DIALOG_TITLE, VALIDATION_MESSAGE);
                return Ok(SaveOutcome::Rejected);
            }
            Err(e) => return Err(e),
        };

        self.store.save(&record)?;
        self.record = record;
        Ok(SaveOutcome::Saved(record))
    }
}
