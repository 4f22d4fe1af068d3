//! 预设处理上下文
//!
//! 封装"我正在处理第几份预设"这一信息，仅用于日志

use std::fmt::Display;

#[derive(Debug, Clone)]
pub struct RequestCtx {
    /// 预设序号（从1开始）
    pub index: usize,

    /// 预设总数
    pub total: usize,

    /// 预设名称（文件名）
    pub name: String,
}

impl RequestCtx {
    pub fn new(index: usize, total: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            total,
            name: name.into(),
        }
    }
}

impl Display for RequestCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[预设 {}/{} {}]", self.index, self.total, self.name)
    }
}
