//! 生成服务 HTTP 客户端 - 基础设施层
//!
//! 只负责把请求发出去、把响应分成三类结果，不关心表单和流程。

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, Operation};
use crate::models::request::ErrorBody;
use crate::models::{ExportRequest, ExportResponse, GenerateResponse, GenerationRequest};

/// 一次网络交互的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    /// 2xx 且响应体解析成功
    Success(T),
    /// 非 2xx
    Rejected { status: u16, detail: Option<String> },
    /// 请求没发出去或响应体无法解析
    TransportFailed(String),
}

impl<T> ApiOutcome<T> {
    /// 转换为带操作信息的 Result
    pub fn into_result(self, operation: Operation) -> AppResult<T> {
        match self {
            ApiOutcome::Success(value) => Ok(value),
            ApiOutcome::Rejected { status, detail } => Err(AppError::Rejected {
                operation,
                status,
                detail,
            }),
            ApiOutcome::TransportFailed(message) => Err(AppError::Transport { operation, message }),
        }
    }
}

/// 生成服务接口
#[async_trait(?Send)]
pub trait MaterialApi {
    /// POST /api/generate
    async fn generate(&self, request: &GenerationRequest) -> ApiOutcome<GenerateResponse>;

    /// POST /api/export
    async fn export(&self, request: &ExportRequest) -> ApiOutcome<ExportResponse>;

    /// 服务地址，用于拼接下载地址
    fn base_url(&self) -> &str;
}

/// 基于 reqwest 的实现
pub struct HttpMaterialApi {
    client: Client,
    base_url: String,
}

impl HttpMaterialApi {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// 检查服务是否在线（GET /api/health）
    pub async fn health(&self) -> bool {
        match self.client.get(self.url("/api/health")).send().await {
            Ok(res) => res.status().is_success(),
            Err(e) => {
                debug!("健康检查失败: {}", e);
                false
            }
        }
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> ApiOutcome<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("POST {}", url);

        let response = match self.client.post(&url).json(body).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("请求 {} 失败: {}", url, e);
                return ApiOutcome::TransportFailed(e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!("{} 返回 {}: {}", url, status, text);
            return ApiOutcome::Rejected {
                status: status.as_u16(),
                detail: ErrorBody::detail_from(&text),
            };
        }

        match response.json::<T>().await {
            Ok(value) => ApiOutcome::Success(value),
            Err(e) => {
                warn!("解析 {} 响应失败: {}", url, e);
                ApiOutcome::TransportFailed(format!("响应解析失败: {}", e))
            }
        }
    }
}

#[async_trait(?Send)]
impl MaterialApi for HttpMaterialApi {
    async fn generate(&self, request: &GenerationRequest) -> ApiOutcome<GenerateResponse> {
        self.post_json(Operation::Generate.endpoint(), request).await
    }

    async fn export(&self, request: &ExportRequest) -> ApiOutcome<ExportResponse> {
        self.post_json(Operation::Export(request.filetype).endpoint(), request)
            .await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_server::serve_once;

    #[test]
    fn test_into_result_tags_operation() {
        let outcome: ApiOutcome<()> = ApiOutcome::Rejected {
            status: 422,
            detail: Some("Chapter not found".to_string()),
        };
        match outcome.into_result(Operation::Generate) {
            Err(AppError::Rejected {
                operation, status, ..
            }) => {
                assert_eq!(operation, Operation::Generate);
                assert_eq!(status, 422);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = HttpMaterialApi::with_base_url("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.url("/api/generate"), "http://localhost:8000/api/generate");
    }

    fn fractions_request() -> GenerationRequest {
        GenerationRequest {
            grade: "5".to_string(),
            chapter: "Fractions".to_string(),
            material_type: "Question paper".to_string(),
            difficulty: "easy".to_string(),
            max_marks: Some(20),
        }
    }

    #[tokio::test]
    async fn test_generate_success_body() {
        let base = serve_once("200 OK", br#"{"output":"Q1. 1/2 + 1/4 = ?"}"#).await;
        let api = HttpMaterialApi::with_base_url(base);

        match api.generate(&fractions_request()).await {
            ApiOutcome::Success(response) => assert_eq!(response.output, "Q1. 1/2 + 1/4 = ?"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_rejection_carries_detail() {
        let base = serve_once(
            "422 Unprocessable Entity",
            br#"{"detail":"Chapter not found"}"#,
        )
        .await;
        let api = HttpMaterialApi::with_base_url(base);

        match api.generate(&fractions_request()).await {
            ApiOutcome::Rejected { status, detail } => {
                assert_eq!(status, 422);
                assert_eq!(detail.as_deref(), Some("Chapter not found"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_transport_failure() {
        let base = serve_once("200 OK", b"<html>gateway</html>").await;
        let api = HttpMaterialApi::with_base_url(base);

        match api.generate(&fractions_request()).await {
            ApiOutcome::TransportFailed(message) => assert!(message.starts_with("响应解析失败")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_export_rejection_with_structured_detail() {
        let base = serve_once(
            "500 Internal Server Error",
            br#"{"detail":[{"msg":"pandoc missing"}]}"#,
        )
        .await;
        let api = HttpMaterialApi::with_base_url(base);
        let request = ExportRequest {
            text: "body".to_string(),
            filetype: crate::models::FileType::Docx,
        };

        match api.export(&request).await {
            ApiOutcome::Rejected { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, None);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_failure() {
        // 端口绑定后立即释放，连接会被拒绝
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = HttpMaterialApi::with_base_url(format!("http://{}", addr));

        assert!(matches!(
            api.generate(&fractions_request()).await,
            ApiOutcome::TransportFailed(_)
        ));
        assert!(!api.health().await);
    }

    /// 需要本地运行生成服务：cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn test_live_health_check() {
        let _ = tracing_subscriber::fmt::try_init();
        let api = HttpMaterialApi::new(&Config::from_env());
        assert!(api.health().await, "生成服务应当在线");
    }
}
