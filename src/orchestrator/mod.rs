//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量预设处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载预设（Vec<MaterialPreset>）
//! - 逐份处理，保证同一时间只有一个生成请求
//! - 输出全局统计信息
//!
//! ### `preset_processor` - 单份预设处理器
//! - 把预设写入表单
//! - 提交生成、展示结果
//! - 按预设导出/下载
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<MaterialPreset>)
//!     ↓
//! preset_processor (处理单份预设)
//!     ↓
//! workflow::MaterialFlow (表单 + 生成 + 导出)
//!     ↓
//! services (能力层：generation / export / notifier)
//!     ↓
//! infrastructure (基础设施：HTTP 客户端 / 下载导航)
//! ```

pub mod batch_processor;
pub mod preset_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use preset_processor::{process_preset, PresetOutcome};
