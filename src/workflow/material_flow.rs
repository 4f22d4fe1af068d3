//! 资料生成流程 - 流程层
//!
//! 核心职责：把表单、生成、导出/下载串成一个完整的工作流
//!
//! 流程顺序：
//! 1. 修改表单 → 重新计算字段策略和提交可用性
//! 2. 提交 → 生成请求 → 保存展示文本
//! 3. （可选）导出 → 打开下载地址

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::infrastructure::{MaterialApi, NavigationTarget, Navigator};
use crate::models::{FieldPolicy, FileType, FormState};
use crate::services::{ExportOrchestrator, GenerationRequester, GenerationState, Notifier};
use crate::workflow::form_store::FormStore;

/// 资料生成工作流
///
/// - 所有方法都取 `&self`，状态只在单线程事件循环上修改
/// - 同一时间最多只有一个生成请求
/// - 导出只读取当前生成结果，不修改它
pub struct MaterialFlow {
    form: RefCell<FormStore>,
    generator: GenerationRequester,
    exporter: ExportOrchestrator,
    notifier: Rc<dyn Notifier>,
}

impl MaterialFlow {
    pub fn new(
        api: Rc<dyn MaterialApi>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            form: RefCell::new(FormStore::new()),
            generator: GenerationRequester::new(api.clone(), notifier.clone()),
            exporter: ExportOrchestrator::new(api, navigator, notifier.clone()),
            notifier,
        }
    }

    /// 修改表单
    ///
    /// ```no_run
    /// # fn example(flow: &material_generator::MaterialFlow) {
    /// flow.edit(|form| {
    ///     form.set_chapter("Fractions");
    ///     form.set_max_marks_input("20");
    /// });
    /// assert!(flow.submit_enabled());
    /// # }
    /// ```
    pub fn edit<R>(&self, f: impl FnOnce(&mut FormStore) -> R) -> R {
        f(&mut self.form.borrow_mut())
    }

    /// 当前表单快照
    pub fn form(&self) -> FormState {
        self.form.borrow().state().clone()
    }

    pub fn policy(&self) -> FieldPolicy {
        self.form.borrow().policy()
    }

    pub fn submit_enabled(&self) -> bool {
        self.form
            .borrow()
            .submit_enabled(self.generator.is_generating())
    }

    pub fn generation_state(&self) -> GenerationState {
        self.generator.state()
    }

    /// 当前展示文本
    pub fn output(&self) -> Option<String> {
        self.generator.output()
    }

    /// 导出按钮是否可用
    pub fn export_available(&self) -> bool {
        self.output().is_some() && !self.exporter.is_exporting()
    }

    /// 提交表单
    ///
    /// 表单不合法时直接返回校验错误，不会发出请求。
    pub async fn submit(&self) -> AppResult<String> {
        if !self.generator.is_generating() {
            if let Err(e) = self.form.borrow().validate() {
                warn!("表单校验未通过: {}", e);
                return Err(e.into());
            }
        }

        let snapshot = self.form();
        self.generator.submit(&snapshot).await
    }

    /// 把当前生成结果导出为指定格式并打开下载地址
    pub async fn download(&self, file_type: FileType) -> AppResult<NavigationTarget> {
        let Some(text) = self.output() else {
            let err = AppError::NothingToExport;
            warn!("{}", err);
            self.notifier.notify(&err.user_message());
            return Err(err);
        };

        self.exporter.export_and_download(&text, file_type).await
    }
}
