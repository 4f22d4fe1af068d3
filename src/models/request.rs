//! 与生成服务交互的请求/响应结构

use serde::{Deserialize, Serialize};

use crate::models::FileType;

/// POST /api/generate 请求体
///
/// 提交时从表单快照生成，之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub grade: String,
    pub chapter: String,
    pub material_type: String,
    pub difficulty: String,
    /// 仅试卷类型携带
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_marks: Option<u32>,
}

/// POST /api/generate 成功响应
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub output: String,
}

/// POST /api/export 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    pub text: String,
    pub filetype: FileType,
}

/// POST /api/export 成功响应
#[derive(Debug, Clone, Deserialize)]
pub struct ExportResponse {
    /// 服务端生成文件的定位符，只用于拼接下载地址
    pub file_path: String,
}

/// 失败响应体，`detail` 不一定存在，也不一定是字符串
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// 从响应文本中取出可读的 detail
    pub fn detail_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}
