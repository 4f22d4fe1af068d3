//! 字段校验策略
//!
//! 由资料类型决定难度是否显示、满分是否必填。

use crate::models::options::{normalize, MaterialKind};

/// 字段可见性/必填性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    pub show_difficulty: bool,
    pub require_max_marks: bool,
}

/// 计算给定资料类型的字段策略
pub fn field_policy(material_type: &str) -> FieldPolicy {
    FieldPolicy {
        show_difficulty: !is_kind(material_type, MaterialKind::LessonPlan),
        require_max_marks: is_kind(material_type, MaterialKind::QuestionPaper),
    }
}

fn is_kind(material_type: &str, kind: MaterialKind) -> bool {
    normalize(material_type) == normalize(kind.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_paper_requires_max_marks() {
        for value in ["Question paper", "question paper", "  QUESTION PAPER\t", "Question Paper"] {
            let policy = field_policy(value);
            assert!(policy.require_max_marks, "{value:?}");
            assert!(policy.show_difficulty, "{value:?}");
        }
    }

    #[test]
    fn test_lesson_plan_hides_difficulty() {
        for value in ["Lesson plan", " lesson PLAN ", "LESSON PLAN"] {
            let policy = field_policy(value);
            assert!(!policy.show_difficulty, "{value:?}");
            assert!(!policy.require_max_marks, "{value:?}");
        }
    }

    #[test]
    fn test_other_types_show_difficulty_without_marks() {
        for value in ["Worksheet", "", "questionpaper", "Question papers", "Flashcards"] {
            assert_eq!(
                field_policy(value),
                FieldPolicy {
                    show_difficulty: true,
                    require_max_marks: false
                },
                "{value:?}"
            );
        }
    }

    #[test]
    fn test_policy_is_idempotent() {
        assert_eq!(field_policy(" Lesson plan"), field_policy(" Lesson plan"));
    }
}
