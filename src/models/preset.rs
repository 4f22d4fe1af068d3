use serde::{Deserialize, Serialize};

use crate::models::{FileType, MaxMarks};

/// 一份资料生成预设（对应一个 TOML 文件）
///
/// ```toml
/// grade = "5"
/// chapter = "Fractions"
/// material_type = "Question paper"
/// difficulty = "easy"
/// max_marks = 20
/// exports = ["pdf", "docx"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialPreset {
    #[serde(default)]
    pub grade: Option<String>,
    pub chapter: String,
    #[serde(default)]
    pub material_type: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "deserialize_max_marks")]
    pub max_marks: MaxMarks,
    #[serde(default)]
    pub exports: Vec<FileType>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl MaterialPreset {
    /// 用于日志显示的名称
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(|p| std::path::Path::new(p).file_stem())
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.chapter.clone())
    }
}

// 满分既可以写成整数，也可以写成字符串
fn deserialize_max_marks<'de, D>(deserializer: D) -> Result<MaxMarks, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct MaxMarksVisitor;

    impl<'de> Visitor<'de> for MaxMarksVisitor {
        type Value = MaxMarks;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string holding the maximum marks")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(MaxMarks::parse(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(u32::try_from(value)
                .map(MaxMarks::Number)
                .unwrap_or_else(|_| MaxMarks::Invalid(value.to_string())))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(u32::try_from(value)
                .map(MaxMarks::Number)
                .unwrap_or_else(|_| MaxMarks::Invalid(value.to_string())))
        }
    }

    deserializer.deserialize_any(MaxMarksVisitor)
}
