use std::fmt;

use thiserror::Error;

use crate::models::FileType;

/// 生成失败的兜底提示（服务端未给出 detail 时）
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate material!";
/// 生成过程中出现网络或解析异常时的提示
pub const GENERATE_ERROR_MESSAGE: &str = "An error occurred while generating the material.";
/// 导出过程中出现网络或解析异常时的提示
pub const EXPORT_ERROR_MESSAGE: &str = "An error occurred while exporting the file.";
/// 下载被服务端拒绝时的提示
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download file!";
/// 下载过程中出现网络或写盘异常时的提示
pub const DOWNLOAD_ERROR_MESSAGE: &str = "An error occurred while downloading the file.";

/// 发起网络交互的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// POST /api/generate
    Generate,
    /// POST /api/export
    Export(FileType),
    /// GET /api/download
    Download,
}

impl Operation {
    /// 对应的接口路径
    pub fn endpoint(self) -> &'static str {
        match self {
            Operation::Generate => "/api/generate",
            Operation::Export(_) => "/api/export",
            Operation::Download => "/api/download",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Generate => write!(f, "生成"),
            Operation::Export(file_type) => write!(f, "导出 {}", file_type),
            Operation::Download => write!(f, "下载"),
        }
    }
}

/// 表单校验错误（请求发出前即被拦截）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Chapter is required.")]
    EmptyChapter,
    #[error("Maximum marks must be a whole number from 1 to 4294967295.")]
    InvalidMaxMarks,
}

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 表单未通过校验
    #[error("表单校验失败: {0}")]
    Validation(#[from] ValidationError),

    /// 服务端返回非 2xx
    #[error("{operation}请求被拒绝 ({}): status={status}, detail={detail:?}", .operation.endpoint())]
    Rejected {
        operation: Operation,
        status: u16,
        detail: Option<String>,
    },

    /// 网络请求或响应解析失败
    #[error("{operation}请求失败 ({}): {message}", .operation.endpoint())]
    Transport { operation: Operation, message: String },

    /// 同类请求仍在进行中
    #[error("{operation}请求仍在进行中")]
    InFlight { operation: Operation },

    /// 还没有可导出的生成结果
    #[error("没有可导出的内容")]
    NothingToExport,

    /// 打开下载目标失败（浏览器或写盘）
    #[error("打开下载目标失败 ({target}): {message}")]
    Navigation { target: String, message: String },
}

impl AppError {
    /// 创建网络请求失败错误
    pub fn transport(operation: Operation, source: impl fmt::Display) -> Self {
        AppError::Transport {
            operation,
            message: source.to_string(),
        }
    }

    /// 创建导航失败错误
    pub fn navigation(target: impl Into<String>, source: impl fmt::Display) -> Self {
        AppError::Navigation {
            target: target.into(),
            message: source.to_string(),
        }
    }

    /// 展示给用户的提示文本
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Rejected {
                operation, detail, ..
            } => match operation {
                Operation::Generate => detail
                    .clone()
                    .unwrap_or_else(|| GENERATE_FAILED_MESSAGE.to_string()),
                Operation::Export(file_type) => file_type.export_failed_message().to_string(),
                Operation::Download => DOWNLOAD_FAILED_MESSAGE.to_string(),
            },
            AppError::Transport { operation, .. } => match operation {
                Operation::Generate => GENERATE_ERROR_MESSAGE.to_string(),
                Operation::Export(_) => EXPORT_ERROR_MESSAGE.to_string(),
                Operation::Download => DOWNLOAD_ERROR_MESSAGE.to_string(),
            },
            AppError::InFlight { operation } => match operation {
                Operation::Generate => "Material generation is already in progress.".to_string(),
                Operation::Export(_) | Operation::Download => {
                    "An export is already in progress.".to_string()
                }
            },
            AppError::NothingToExport => {
                "Nothing to export yet. Generate material first.".to_string()
            }
            AppError::Navigation { .. } => DOWNLOAD_ERROR_MESSAGE.to_string(),
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
