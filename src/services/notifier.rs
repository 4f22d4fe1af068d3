//! 用户提示服务 - 业务能力层
//!
//! 只负责"把提示告诉用户"能力，不关心流程

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::{debug, warn};

/// 阻塞式用户提示
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// 终端提示
///
/// 提示写到 stderr，同时追加到运行日志文件。
pub struct ConsoleNotifier {
    log_file_path: Option<String>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            log_file_path: None,
        }
    }

    /// 同时追加到指定日志文件
    pub fn with_log_file(path: impl Into<String>) -> Self {
        Self {
            log_file_path: Some(path.into()),
        }
    }

    fn append_to_log(&self, path: &str, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let line = format!(
            "[{}] {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            message
        );
        file.write_all(line.as_bytes())
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        warn!("⚠️ {}", message);
        eprintln!("{}", message);

        if let Some(path) = &self.log_file_path {
            if let Err(e) = self.append_to_log(path, message) {
                warn!("写入日志文件 {} 失败: {}", path, e);
            }
        }
    }
}

/// 只在内存中记录提示，供嵌入方自行展示
#[derive(Default)]
pub struct MemoryNotifier {
    messages: RefCell<Vec<String>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 目前收到的全部提示
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        debug!("提示: {}", message);
        self.messages.borrow_mut().push(message.to_string());
    }
}
