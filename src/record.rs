//! 模板渲染所用的数据记录

use serde::{Deserialize, Serialize};

use crate::error::GreeterError;

/// 单条库存记录：材料名称 + 数量
///
/// 序列化字段名为 `Material` / `Count`，与模板中的占位符一一对应。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Inventory {
    pub material: String,
    pub count: u64,
}

impl Inventory {
    pub fn new(material: impl Into<String>, count: u64) -> Self {
        Self {
            material: material.into(),
            count,
        }
    }

    /// 导出入口使用的固定记录
    pub fn sample() -> Self {
        Self::new("wool", 17)
    }

    /// 从 JSON 文本解析记录，例如 `{"Material": "wool", "Count": 17}`
    pub fn from_json(text: &str) -> Result<Self, GreeterError> {
        serde_json::from_str(text)
            .map_err(|e| GreeterError::Config(format!("invalid record: {e}")))
    }
}
