#![allow(dead_code)]

use async_trait::async_trait;
use material_generator::models::{ExportRequest, ExportResponse, GenerateResponse, GenerationRequest};
use material_generator::{ApiOutcome, AppError, AppResult, MaterialApi, NavigationTarget, Navigator};
use std::cell::RefCell;
use std::collections::VecDeque;
use tokio::sync::oneshot;

/// 按顺序返回预置结果的生成服务，同时记录收到的请求
#[derive(Default)]
pub struct FakeApi {
    pub base_url: String,
    generate_replies: RefCell<VecDeque<ApiOutcome<GenerateResponse>>>,
    export_replies: RefCell<VecDeque<ApiOutcome<ExportResponse>>>,
    generate_gate: RefCell<Option<oneshot::Receiver<()>>>,
    export_gate: RefCell<Option<oneshot::Receiver<()>>>,
    pub generate_calls: RefCell<Vec<GenerationRequest>>,
    pub export_calls: RefCell<Vec<ExportRequest>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generated(self, output: &str) -> Self {
        self.reply_generate(ApiOutcome::Success(GenerateResponse {
            output: output.to_string(),
        }))
    }

    pub fn reply_generate(self, outcome: ApiOutcome<GenerateResponse>) -> Self {
        self.generate_replies.borrow_mut().push_back(outcome);
        self
    }

    pub fn exported(self, file_path: &str) -> Self {
        self.reply_export(ApiOutcome::Success(ExportResponse {
            file_path: file_path.to_string(),
        }))
    }

    pub fn reply_export(self, outcome: ApiOutcome<ExportResponse>) -> Self {
        self.export_replies.borrow_mut().push_back(outcome);
        self
    }

    /// 下一次生成请求在发送端触发前保持挂起
    pub fn hold_generate(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.generate_gate.borrow_mut() = Some(rx);
        tx
    }

    /// 下一次导出请求在发送端触发前保持挂起
    pub fn hold_export(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.export_gate.borrow_mut() = Some(rx);
        tx
    }
}

#[async_trait(?Send)]
impl MaterialApi for FakeApi {
    async fn generate(&self, request: &GenerationRequest) -> ApiOutcome<GenerateResponse> {
        self.generate_calls.borrow_mut().push(request.clone());
        let gate = self.generate_gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        self.generate_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| ApiOutcome::TransportFailed("no reply queued".to_string()))
    }

    async fn export(&self, request: &ExportRequest) -> ApiOutcome<ExportResponse> {
        self.export_calls.borrow_mut().push(request.clone());
        let gate = self.export_gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        self.export_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| ApiOutcome::TransportFailed("no reply queued".to_string()))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// 记录打开过的下载地址
#[derive(Default)]
pub struct FakeNavigator {
    pub opened: RefCell<Vec<NavigationTarget>>,
    fail_with: RefCell<Option<AppError>>,
}

impl FakeNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: AppError) -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
            fail_with: RefCell::new(Some(error)),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.opened.borrow().iter().map(|t| t.url.clone()).collect()
    }
}

#[async_trait(?Send)]
impl Navigator for FakeNavigator {
    async fn open(&self, target: &NavigationTarget) -> AppResult<()> {
        if let Some(err) = self.fail_with.borrow_mut().take() {
            return Err(err);
        }
        self.opened.borrow_mut().push(target.clone());
        Ok(())
    }
}
