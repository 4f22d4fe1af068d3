//! 年级、资料类型、难度的可选值

/// 可选年级 1-12
pub const GRADES: [&str; 12] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"];

/// 资料类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// 试卷
    QuestionPaper,
    /// 练习单
    Worksheet,
    /// 教案
    LessonPlan,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 3] = [
        MaterialKind::QuestionPaper,
        MaterialKind::Worksheet,
        MaterialKind::LessonPlan,
    ];

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::QuestionPaper => "Question paper",
            MaterialKind::Worksheet => "Worksheet",
            MaterialKind::LessonPlan => "Lesson plan",
        }
    }

    /// 按规范化后的名称查找（去首尾空白、忽略大小写）
    pub fn find(s: &str) -> Option<Self> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == normalized)
    }
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 难度
pub const DIFFICULTIES: [&str; 3] = ["easy", "medium", "difficult"];

/// 去首尾空白并转小写
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

pub fn is_known_grade(grade: &str) -> bool {
    GRADES.contains(&grade.trim())
}

pub fn is_known_difficulty(difficulty: &str) -> bool {
    let normalized = normalize(difficulty);
    DIFFICULTIES.iter().any(|d| *d == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_material_kind() {
        assert_eq!(MaterialKind::find("  QUESTION paper "), Some(MaterialKind::QuestionPaper));
        assert_eq!(MaterialKind::find("lesson Plan"), Some(MaterialKind::LessonPlan));
        assert_eq!(MaterialKind::find("worksheet"), Some(MaterialKind::Worksheet));
        assert_eq!(MaterialKind::find("Flashcards"), None);
    }

    #[test]
    fn test_known_values() {
        assert!(is_known_grade("12"));
        assert!(!is_known_grade("13"));
        assert!(is_known_difficulty("Medium"));
        assert!(!is_known_difficulty(""));
    }
}
