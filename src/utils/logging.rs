use anyhow::Result;
/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 测试中可能重复初始化，忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n资料生成日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 资料生成模式");
    info!("🌐 服务地址: {}", config.api_base_url);
    info!("📥 下载方式: {:?}", config.navigation_mode);
    info!("{}", "=".repeat(60));
}

/// 记录预设加载信息
pub fn log_presets_loaded(total: usize) {
    info!("✓ 找到 {} 份待处理的预设", total);
    info!("💡 每次只处理一份，完成后再开始下一份\n");
}

/// 打印最终统计信息
///
/// # 参数
/// - `generated`: 生成成功数量
/// - `skipped`: 表单不合法而跳过的数量
/// - `failed`: 生成失败数量
/// - `exported`: 成功导出的文件数量
/// - `export_failed`: 导出失败的文件数量
/// - `total`: 预设总数
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(
    generated: usize,
    skipped: usize,
    failed: usize,
    exported: usize,
    export_failed: usize,
    total: usize,
    log_file_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    for line in stats_lines(generated, skipped, failed, exported, export_failed, total) {
        info!("{}", line);
    }
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

fn stats_lines(
    generated: usize,
    skipped: usize,
    failed: usize,
    exported: usize,
    export_failed: usize,
    total: usize,
) -> Vec<String> {
    vec![
        format!("✅ 生成成功: {}/{}", generated, total),
        format!("⏭️ 跳过: {}", skipped),
        format!("❌ 失败: {}", failed),
        format!("📄 导出文件: {}", exported),
        format!("⚠️ 导出失败: {}", export_failed),
    ]
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("分数加法练习", 2), "分数...");
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn test_stats_lines_include_failed_exports() {
        let lines = stats_lines(3, 1, 1, 4, 2, 5);
        assert_eq!(lines[0], "✅ 生成成功: 3/5");
        assert!(lines.contains(&"⚠️ 导出失败: 2".to_string()));
    }

    #[test]
    fn test_init_log_file_writes_header() {
        let path = std::env::temp_dir().join(format!("material_log_{}.txt", std::process::id()));
        init_log_file(path.to_str().unwrap()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("资料生成日志"));
        let _ = fs::remove_file(&path);
    }
}
