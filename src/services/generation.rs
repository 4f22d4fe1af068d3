//! 生成请求服务 - 业务能力层
//!
//! 负责一次"生成"：构造请求、发送、维护进度状态和展示文本。
//! 提交前的表单校验由调用方负责。

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult, Operation};
use crate::infrastructure::MaterialApi;
use crate::models::policy::field_policy;
use crate::models::{FormState, GenerationRequest};
use crate::services::notifier::Notifier;

/// 生成进度
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
    /// 展示文本
    Success(String),
    /// 已提示给用户的错误信息
    Error(String),
}

/// 请求被中途丢弃时把 Generating 退回 Idle
struct GeneratingGuard<'a>(&'a RefCell<GenerationState>);

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.0.borrow_mut();
        if *state == GenerationState::Generating {
            *state = GenerationState::Idle;
        }
    }
}

pub struct GenerationRequester {
    api: Rc<dyn MaterialApi>,
    notifier: Rc<dyn Notifier>,
    state: RefCell<GenerationState>,
}

impl GenerationRequester {
    pub fn new(api: Rc<dyn MaterialApi>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            state: RefCell::new(GenerationState::Idle),
        }
    }

    pub fn state(&self) -> GenerationState {
        self.state.borrow().clone()
    }

    pub fn is_generating(&self) -> bool {
        *self.state.borrow() == GenerationState::Generating
    }

    /// 当前展示文本（仅成功状态下存在）
    pub fn output(&self) -> Option<String> {
        match &*self.state.borrow() {
            GenerationState::Success(text) => Some(text.clone()),
            _ => None,
        }
    }

    /// 从表单快照构造请求，满分只在试卷类型下携带
    pub fn build_request(form: &FormState) -> GenerationRequest {
        let max_marks = if field_policy(&form.material_type).require_max_marks {
            form.max_marks.positive()
        } else {
            None
        };

        GenerationRequest {
            grade: form.grade.clone(),
            chapter: form.chapter.clone(),
            material_type: form.material_type.clone(),
            difficulty: form.difficulty.clone(),
            max_marks,
        }
    }

    /// 在生成内容前回显本次请求参数
    pub fn render(request: &GenerationRequest, generated: &str) -> String {
        let marks = match request.max_marks {
            Some(n) if field_policy(&request.material_type).require_max_marks => {
                format!(", Max Marks: {}", n)
            }
            _ => String::new(),
        };

        format!(
            "Generated {} (Grade: {}, Chapter: {}, Difficulty: {}{})\n\n{}",
            request.material_type, request.grade, request.chapter, request.difficulty, marks, generated
        )
    }

    /// 提交一次生成
    ///
    /// 进行中时拒绝再次提交；失败时提示用户并进入 Error 状态。
    pub async fn submit(&self, form: &FormState) -> AppResult<String> {
        if self.is_generating() {
            let err = AppError::InFlight {
                operation: Operation::Generate,
            };
            warn!("{}", err);
            self.notifier.notify(&err.user_message());
            return Err(err);
        }

        let request = Self::build_request(form);
        *self.state.borrow_mut() = GenerationState::Generating;
        let _guard = GeneratingGuard(&self.state);

        info!(
            "📝 正在生成 {} (年级: {}, 章节: {})",
            request.material_type, request.grade, request.chapter
        );
        debug!("生成请求: {:?}", request);

        let result = self
            .api
            .generate(&request)
            .await
            .into_result(Operation::Generate);

        match result {
            Ok(response) => {
                let rendered = Self::render(&request, &response.output);
                info!("✓ 生成完成，共 {} 字符", response.output.chars().count());
                *self.state.borrow_mut() = GenerationState::Success(rendered.clone());
                Ok(rendered)
            }
            Err(e) => {
                warn!("❌ {}", e);
                let message = e.user_message();
                self.notifier.notify(&message);
                *self.state.borrow_mut() = GenerationState::Error(message);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaxMarks;
    use serde_json::json;

    fn scenario_a() -> FormState {
        FormState {
            grade: "5".to_string(),
            chapter: "Fractions".to_string(),
            material_type: "Question paper".to_string(),
            difficulty: "easy".to_string(),
            max_marks: MaxMarks::Number(20),
        }
    }

    #[test]
    fn test_question_paper_request_body() {
        let request = GenerationRequester::build_request(&scenario_a());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "grade": "5",
                "chapter": "Fractions",
                "material_type": "Question paper",
                "difficulty": "easy",
                "max_marks": 20
            })
        );
    }

    #[test]
    fn test_stale_max_marks_dropped_for_other_types() {
        let mut form = scenario_a();
        form.material_type = "Worksheet".to_string();
        let request = GenerationRequester::build_request(&form);
        assert_eq!(request.max_marks, None);
        assert!(serde_json::to_value(&request)
            .unwrap()
            .get("max_marks")
            .is_none());
    }

    #[test]
    fn test_render_echoes_parameters() {
        let request = GenerationRequester::build_request(&scenario_a());
        assert_eq!(
            GenerationRequester::render(&request, "Q1. 1/2 + 1/4 = ?"),
            "Generated Question paper (Grade: 5, Chapter: Fractions, Difficulty: easy, Max Marks: 20)\n\nQ1. 1/2 + 1/4 = ?"
        );
    }

    #[test]
    fn test_render_lesson_plan_without_marks() {
        let form = FormState {
            grade: "3".to_string(),
            chapter: "Plants".to_string(),
            material_type: "Lesson plan".to_string(),
            difficulty: String::new(),
            max_marks: MaxMarks::Number(40),
        };
        let request = GenerationRequester::build_request(&form);
        assert_eq!(
            GenerationRequester::render(&request, "Plan"),
            "Generated Lesson plan (Grade: 3, Chapter: Plants, Difficulty: )\n\nPlan"
        );
    }
}
