use serde::{Deserialize, Serialize};

/// 默认年级
pub const DEFAULT_GRADE: &str = "1";
/// 默认资料类型
pub const DEFAULT_MATERIAL_TYPE: &str = "Question paper";
/// 默认难度
pub const DEFAULT_DIFFICULTY: &str = "easy";

/// 满分输入框的原始状态
///
/// 输入框可能为空、为 u32 范围内的整数，也可能是无法解析的内容（含负数和越界值）。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaxMarks {
    #[default]
    Absent,
    Number(u32),
    Invalid(String),
}

impl MaxMarks {
    /// 解析输入框文本
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return MaxMarks::Absent;
        }
        match trimmed.parse::<u32>() {
            Ok(n) => MaxMarks::Number(n),
            Err(_) => MaxMarks::Invalid(trimmed.to_string()),
        }
    }

    /// 仅在值为 >= 1 的整数时返回
    pub fn positive(&self) -> Option<u32> {
        match self {
            MaxMarks::Number(n) if *n >= 1 => Some(*n),
            _ => None,
        }
    }
}

impl From<u32> for MaxMarks {
    fn from(value: u32) -> Self {
        MaxMarks::Number(value)
    }
}

/// 表单当前值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub grade: String,
    pub chapter: String,
    pub material_type: String,
    /// 教案类型时为空
    pub difficulty: String,
    pub max_marks: MaxMarks,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            grade: DEFAULT_GRADE.to_string(),
            chapter: String::new(),
            material_type: DEFAULT_MATERIAL_TYPE.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            max_marks: MaxMarks::Absent,
        }
    }
}
