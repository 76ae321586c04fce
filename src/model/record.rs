//! LocationRecord：落盘的 {x, y, floor} 整数三元组

use std::fmt;

use serde::{Deserialize, Serialize};

/// 定位记录
///
/// 字段声明顺序即磁盘上的键顺序（x、y、floor）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub x: i64,
    pub y: i64,
    pub floor: i64,
}

impl LocationRecord {
    pub fn new(x: i64, y: i64, floor: i64) -> Self {
        Self { x, y, floor }
    }

    /// 按字段取值
    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::X => self.x,
            Field::Y => self.y,
            Field::Floor => self.floor,
        }
    }
}

/// 表单中的三个输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    X,
    Y,
    Floor,
}

impl Field {
    /// 界面顺序
    pub const ALL: [Field; 3] = [Field::X, Field::Y, Field::Floor];

    pub fn label(&self) -> &'static str {
        match self {
            Field::X => "X",
            Field::Y => "Y",
            Field::Floor => "Floor",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
