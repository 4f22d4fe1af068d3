//! 批量预设处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量预设的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建日志文件、检查服务、准备下载导航
//! 2. **批量加载**：扫描并加载所有预设（`Vec<MaterialPreset>`）
//! 3. **顺序处理**：同一时间只允许一个生成请求，逐份处理
//! 4. **资源管理**：持有 HTTP 客户端和浏览器连接
//! 5. **全局统计**：汇总所有预设的处理结果

use crate::config::Config;
use crate::infrastructure::{
    BrowserNavigator, HttpDownloader, HttpMaterialApi, MaterialApi, NavigationMode, Navigator,
};
use crate::models::MaterialPreset;
use crate::orchestrator::preset_processor::{self, PresetOutcome};
use crate::services::{ConsoleNotifier, Notifier};
use crate::utils::logging;
use crate::workflow::{MaterialFlow, RequestCtx};
use anyhow::Result;
use std::rc::Rc;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: MaterialFlow,
}

/// 处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub exported: usize,
    pub export_failed: usize,
    pub total: usize,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)?;

        logging::log_startup(&config);

        let api = HttpMaterialApi::new(&config);
        if api.health().await {
            info!("✓ 生成服务在线");
        } else {
            warn!("⚠️ 生成服务暂不可达: {}", config.api_base_url);
        }

        let navigator: Rc<dyn Navigator> = match config.navigation_mode {
            NavigationMode::Download => Rc::new(HttpDownloader::new(&config.download_dir)),
            NavigationMode::Browser => {
                Rc::new(BrowserNavigator::connect(config.browser_debug_port).await?)
            }
        };
        let notifier: Rc<dyn Notifier> =
            Rc::new(ConsoleNotifier::with_log_file(&config.output_log_file));

        let flow = MaterialFlow::new(Rc::new(api), navigator, notifier);
        Ok(Self::new(config, flow))
    }

    /// 使用现成的工作流创建应用
    pub fn new(config: Config, flow: MaterialFlow) -> Self {
        Self { config, flow }
    }

    /// 使用自定义的服务接口、导航和提示创建应用
    pub fn with_parts(
        config: Config,
        api: Rc<dyn MaterialApi>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self::new(config, MaterialFlow::new(api, navigator, notifier))
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ProcessingStats> {
        // 加载所有预设
        let presets = self.load_presets().await?;

        if presets.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML预设，程序结束");
            return Ok(ProcessingStats::default());
        }

        logging::log_presets_loaded(presets.len());

        let stats = self.process_all_presets(&presets).await;

        // 输出最终统计
        logging::print_final_stats(
            stats.generated,
            stats.skipped,
            stats.failed,
            stats.exported,
            stats.export_failed,
            stats.total,
            &self.config.output_log_file,
        );

        Ok(stats)
    }

    /// 加载预设
    async fn load_presets(&self) -> Result<Vec<MaterialPreset>> {
        info!("\n📁 正在扫描待处理的预设...");
        crate::models::load_all_presets(&self.config.request_folder).await
    }

    /// 逐份处理所有预设
    async fn process_all_presets(&self, presets: &[MaterialPreset]) -> ProcessingStats {
        let total = presets.len();
        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        for (idx, preset) in presets.iter().enumerate() {
            let ctx = RequestCtx::new(idx + 1, total, preset.display_name());

            match preset_processor::process_preset(&self.flow, preset, &ctx).await {
                PresetOutcome::Generated {
                    exported,
                    export_failed,
                } => {
                    stats.generated += 1;
                    stats.exported += exported;
                    stats.export_failed += export_failed;
                }
                PresetOutcome::Skipped => stats.skipped += 1,
                PresetOutcome::Failed => stats.failed += 1,
            }
        }

        stats
    }
}
