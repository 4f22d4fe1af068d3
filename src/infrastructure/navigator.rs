//! 下载导航 - 基础设施层
//!
//! 拿到导出文件的定位符后，拼出下载地址并在新的上下文中打开它：
//! 要么直接下载到本地目录，要么在浏览器新标签页中打开。

use std::path::{Path, PathBuf};
use std::str::FromStr;

use async_trait::async_trait;
use chromiumoxide::Browser;
use futures::StreamExt;
use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::error::{AppError, AppResult, Operation};
use crate::models::request::ErrorBody;

/// 下载导航方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// 直接下载到本地目录
    Download,
    /// 在浏览器新标签页中打开
    Browser,
}

impl FromStr for NavigationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "download" | "http" => Ok(NavigationMode::Download),
            "browser" => Ok(NavigationMode::Browser),
            other => Err(format!("未知的导航方式: {}", other)),
        }
    }
}

/// 下载导航目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    /// 完整下载地址
    pub url: String,
    /// 服务端返回的文件定位符
    pub file_path: String,
}

impl NavigationTarget {
    /// 拼接 `/api/download?file_path=<编码后的定位符>`
    pub fn download(base_url: &str, file_path: &str) -> Self {
        Self {
            url: format!(
                "{}{}?file_path={}",
                base_url.trim_end_matches('/'),
                Operation::Download.endpoint(),
                urlencoding::encode(file_path)
            ),
            file_path: file_path.to_string(),
        }
    }

    /// 定位符中的文件名
    pub fn file_name(&self) -> String {
        Path::new(&self.file_path)
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "download.bin".to_string())
    }
}

/// 打开下载目标的能力
#[async_trait(?Send)]
pub trait Navigator {
    async fn open(&self, target: &NavigationTarget) -> AppResult<()>;
}

/// 通过 HTTP 直接下载到本地目录
pub struct HttpDownloader {
    client: Client,
    download_dir: PathBuf,
}

impl HttpDownloader {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: Client::new(),
            download_dir: download_dir.into(),
        }
    }

    /// 下载文件的保存路径
    pub fn destination(&self, target: &NavigationTarget) -> PathBuf {
        self.download_dir.join(target.file_name())
    }
}

#[async_trait(?Send)]
impl Navigator for HttpDownloader {
    async fn open(&self, target: &NavigationTarget) -> AppResult<()> {
        debug!("GET {}", target.url);

        let response = self
            .client
            .get(&target.url)
            .send()
            .await
            .map_err(|e| AppError::transport(Operation::Download, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Rejected {
                operation: Operation::Download,
                status: status.as_u16(),
                detail: ErrorBody::detail_from(&text),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::transport(Operation::Download, e))?;

        let destination = self.destination(target);
        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(|e| AppError::navigation(self.download_dir.display().to_string(), e))?;
        tokio::fs::write(&destination, &bytes)
            .await
            .map_err(|e| AppError::navigation(destination.display().to_string(), e))?;

        info!("✓ 文件已保存: {} ({} 字节)", destination.display(), bytes.len());
        Ok(())
    }
}

/// 在已连接浏览器的新标签页中打开下载地址
pub struct BrowserNavigator {
    browser: Browser,
    _handler: JoinHandle<()>,
}

impl BrowserNavigator {
    /// 连接到已开启远程调试端口的浏览器
    ///
    /// 事件处理任务与浏览器句柄同生命周期。
    pub async fn connect(port: u16) -> anyhow::Result<Self> {
        let devtools_url = format!("http://localhost:{}", port);
        info!("🌐 正在连接浏览器: {}", devtools_url);

        let (browser, mut events) = Browser::connect(&devtools_url).await.map_err(|e| {
            error!("连接浏览器失败: {}", e);
            e
        })?;

        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if event.is_err() {
                    break;
                }
            }
        });
        debug!("浏览器事件循环已启动");

        Ok(Self {
            browser,
            _handler: handler,
        })
    }
}

#[async_trait(?Send)]
impl Navigator for BrowserNavigator {
    async fn open(&self, target: &NavigationTarget) -> AppResult<()> {
        self.browser
            .new_page(target.url.as_str())
            .await
            .map_err(|e| AppError::navigation(target.url.clone(), e))?;
        info!("已在新标签页打开: {}", target.url);
        Ok(())
    }
}
