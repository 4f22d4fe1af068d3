//! 单份预设处理器 - 编排层
//!
//! ## 职责
//!
//! 把一份 TOML 预设灌入表单，走完"生成 → 展示 → 导出/下载"流程。
//!
//! ## 核心功能
//!
//! 1. **填写表单**：从默认值开始，按预设逐项设置（资料类型最先）
//! 2. **提交前校验**：表单不合法时直接跳过，不发请求
//! 3. **展示结果**：把生成的展示文本输出到 stdout
//! 4. **导出下载**：按预设中的格式依次导出
//! 5. **统计输出**：记录导出成功/失败数量

use tracing::{error, info, warn};

use crate::models::options::{is_known_difficulty, is_known_grade, MaterialKind};
use crate::models::MaterialPreset;
use crate::utils::logging::truncate_text;
use crate::workflow::{FormStore, MaterialFlow, RequestCtx};

/// 单份预设的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetOutcome {
    /// 生成成功
    Generated { exported: usize, export_failed: usize },
    /// 表单不合法，未发出请求
    Skipped,
    /// 生成失败
    Failed,
}

/// 从默认值开始，把预设写入表单
pub fn apply_preset(form: &mut FormStore, preset: &MaterialPreset) {
    *form = FormStore::new();

    if let Some(material_type) = &preset.material_type {
        form.set_material_type(material_type.as_str());
    }
    if let Some(grade) = &preset.grade {
        form.set_grade(grade.as_str());
    }
    form.set_chapter(preset.chapter.as_str());
    if let Some(difficulty) = &preset.difficulty {
        if form.policy().show_difficulty {
            form.set_difficulty(difficulty.as_str());
        }
    }
    form.set_max_marks(preset.max_marks.clone());
}

/// 处理单份预设
pub async fn process_preset(
    flow: &MaterialFlow,
    preset: &MaterialPreset,
    ctx: &RequestCtx,
) -> PresetOutcome {
    log_preset_start(ctx, preset);
    warn_unknown_values(ctx, preset);

    let validation = flow.edit(|form| {
        apply_preset(form, preset);
        form.validate()
    });
    if let Err(e) = validation {
        warn!("{} ⏭️ 表单不完整，跳过生成: {}", ctx, e);
        return PresetOutcome::Skipped;
    }

    let rendered = match flow.submit().await {
        Ok(rendered) => rendered,
        Err(e) => {
            error!("{} ❌ 生成失败: {}", ctx, e);
            return PresetOutcome::Failed;
        }
    };

    info!("{} ✓ 生成完成: {}", ctx, truncate_text(&rendered, 60));
    println!("{}\n", rendered);

    let mut exported = 0;
    let mut export_failed = 0;
    for file_type in &preset.exports {
        match flow.download(*file_type).await {
            Ok(target) => {
                info!("{} ✓ {} 已导出: {}", ctx, file_type, target.file_path);
                exported += 1;
            }
            Err(e) => {
                error!("{} ❌ {} 导出失败: {}", ctx, file_type, e);
                export_failed += 1;
            }
        }
    }

    log_preset_complete(ctx, exported, export_failed);

    PresetOutcome::Generated {
        exported,
        export_failed,
    }
}

fn warn_unknown_values(ctx: &RequestCtx, preset: &MaterialPreset) {
    if let Some(grade) = &preset.grade {
        if !is_known_grade(grade) {
            warn!("{} ⚠️ 未知年级: {}", ctx, grade);
        }
    }
    if let Some(material_type) = &preset.material_type {
        if MaterialKind::find(material_type).is_none() {
            warn!("{} ⚠️ 未知资料类型: {}", ctx, material_type);
        }
    }
    if let Some(difficulty) = &preset.difficulty {
        if !difficulty.is_empty() && !is_known_difficulty(difficulty) {
            warn!("{} ⚠️ 未知难度: {}", ctx, difficulty);
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_preset_start(ctx: &RequestCtx, preset: &MaterialPreset) {
    info!("\n{} {}", ctx, "─".repeat(30));
    info!("{} 章节: {}", ctx, preset.chapter);
    if !preset.exports.is_empty() {
        let formats: Vec<&str> = preset.exports.iter().map(|f| f.as_str()).collect();
        info!("{} 导出格式: {}", ctx, formats.join(", "));
    }
}

fn log_preset_complete(ctx: &RequestCtx, exported: usize, export_failed: usize) {
    info!(
        "{} 导出统计: 成功 {}, 失败 {}",
        ctx, exported, export_failed
    );
    info!("{} ✅ 预设处理完成\n", ctx);
}
