//! 导出/下载服务 - 业务能力层
//!
//! 两个阶段：先把文本提交给导出接口拿到文件定位符，再打开下载地址。
//! 任一阶段失败都会提示用户并终止，不影响生成结果。

use std::cell::Cell;
use std::rc::Rc;

use tracing::{info, warn};

use crate::error::{AppError, AppResult, Operation};
use crate::infrastructure::{MaterialApi, NavigationTarget, Navigator};
use crate::models::{ExportRequest, FileType};
use crate::services::notifier::Notifier;

pub struct ExportOrchestrator {
    api: Rc<dyn MaterialApi>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    exporting: Cell<bool>,
}

/// 离开作用域时清除进行中标记
struct InFlightGuard<'a>(&'a Cell<bool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl ExportOrchestrator {
    pub fn new(
        api: Rc<dyn MaterialApi>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            navigator,
            notifier,
            exporting: Cell::new(false),
        }
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.get()
    }

    /// 导出并打开下载地址
    pub async fn export_and_download(
        &self,
        text: &str,
        file_type: FileType,
    ) -> AppResult<NavigationTarget> {
        if self.exporting.get() {
            let err = AppError::InFlight {
                operation: Operation::Export(file_type),
            };
            return Err(self.report(err));
        }

        self.exporting.set(true);
        let _guard = InFlightGuard(&self.exporting);

        match self.run(text, file_type).await {
            Ok(target) => Ok(target),
            Err(e) => Err(self.report(e)),
        }
    }

    async fn run(&self, text: &str, file_type: FileType) -> AppResult<NavigationTarget> {
        info!("📤 正在导出 {} ...", file_type);

        let request = ExportRequest {
            text: text.to_string(),
            filetype: file_type,
        };
        let response = self
            .api
            .export(&request)
            .await
            .into_result(Operation::Export(file_type))?;

        let target = NavigationTarget::download(self.api.base_url(), &response.file_path);
        info!("📥 正在打开下载地址: {}", target.url);
        self.navigator.open(&target).await?;

        Ok(target)
    }

    fn report(&self, err: AppError) -> AppError {
        warn!("❌ {}", err);
        self.notifier.notify(&err.user_message());
        err
    }
}
