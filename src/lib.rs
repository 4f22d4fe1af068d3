//! # Material Generator
//!
//! 教学资料（试卷 / 练习单 / 教案）生成与导出的工作流控制器
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有 HTTP 客户端和浏览器连接，只暴露能力
//! - `MaterialApi` - 生成 / 导出接口，结果分为成功、拒绝、传输失败三类
//! - `Navigator` - 打开下载地址（直接下载或交给浏览器）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `GenerationRequester` - 组装请求、调用生成接口、维护生成状态
//! - `ExportOrchestrator` - 导出 + 下载两阶段流程
//! - `Notifier` - 向用户提示错误
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次生成"的完整流程
//! - `FormStore` - 表单状态和字段策略
//! - `MaterialFlow` - 流程编排（表单 → 生成 → 导出 → 下载）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量预设处理器，管理资源
//! - `orchestrator/preset_processor` - 单份预设处理器
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, Operation, ValidationError};
pub use infrastructure::{
    ApiOutcome, HttpMaterialApi, MaterialApi, NavigationMode, NavigationTarget, Navigator,
};
pub use models::{FileType, FormState, MaterialPreset, MaxMarks};
pub use orchestrator::{App, ProcessingStats};
pub use services::{GenerationState, MemoryNotifier, Notifier};
pub use workflow::{FormStore, MaterialFlow};
