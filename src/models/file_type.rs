use serde::{Deserialize, Serialize};

/// 导出文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF
    Pdf,
    /// Word (.docx)
    #[serde(alias = "word")]
    Docx,
}

impl FileType {
    /// 接口使用的格式名
    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
        }
    }

    /// 导出被拒绝时的提示
    pub fn export_failed_message(self) -> &'static str {
        match self {
            FileType::Pdf => "Failed to export PDF!",
            FileType::Docx => "Failed to export Word file!",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
