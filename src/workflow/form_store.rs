//! 表单状态持有者
//!
//! 持有所有输入字段的当前值；修改资料类型时重新应用字段策略。

use crate::error::ValidationError;
use crate::models::form::DEFAULT_DIFFICULTY;
use crate::models::policy::{field_policy, FieldPolicy};
use crate::models::{FormState, MaxMarks};

#[derive(Debug, Clone, Default)]
pub struct FormStore {
    state: FormState,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// 当前资料类型对应的字段策略
    pub fn policy(&self) -> FieldPolicy {
        field_policy(&self.state.material_type)
    }

    pub fn set_grade(&mut self, grade: impl Into<String>) {
        self.state.grade = grade.into();
    }

    pub fn set_chapter(&mut self, chapter: impl Into<String>) {
        self.state.chapter = chapter.into();
    }

    /// 修改资料类型
    ///
    /// 难度被隐藏时清空；重新显示且当前为空时恢复为 "easy"。
    pub fn set_material_type(&mut self, material_type: impl Into<String>) {
        self.state.material_type = material_type.into();
        if !self.policy().show_difficulty {
            self.state.difficulty.clear();
        } else if self.state.difficulty.is_empty() {
            self.state.difficulty = DEFAULT_DIFFICULTY.to_string();
        }
    }

    pub fn set_difficulty(&mut self, difficulty: impl Into<String>) {
        self.state.difficulty = difficulty.into();
    }

    pub fn set_max_marks(&mut self, max_marks: MaxMarks) {
        self.state.max_marks = max_marks;
    }

    /// 按输入框文本设置满分
    pub fn set_max_marks_input(&mut self, raw: &str) {
        self.state.max_marks = MaxMarks::parse(raw);
    }

    /// 不考虑进行中请求时的校验结果
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.state.chapter.is_empty() {
            return Err(ValidationError::EmptyChapter);
        }
        if self.policy().require_max_marks && self.state.max_marks.positive().is_none() {
            return Err(ValidationError::InvalidMaxMarks);
        }
        Ok(())
    }

    /// 提交按钮是否可用
    pub fn submit_enabled(&self, generating: bool) -> bool {
        !generating && self.validate().is_ok()
    }
}
