use crate::models::MaterialPreset;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载一份生成预设
pub async fn load_preset(toml_file_path: &Path) -> Result<MaterialPreset> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let mut preset: MaterialPreset = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    // 设置文件路径
    preset.file_path = Some(toml_file_path.to_string_lossy().to_string());

    Ok(preset)
}

/// 从文件夹中加载所有 TOML 预设，按文件名排序
///
/// 单个文件解析失败只记录警告，不影响其他文件。
pub async fn load_all_presets(folder_path: &str) -> Result<Vec<MaterialPreset>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut toml_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }
    toml_files.sort();

    let mut presets = Vec::with_capacity(toml_files.len());
    for path in toml_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_preset(&path).await {
            Ok(preset) => {
                tracing::info!(
                    "成功加载预设: {} / 导出 {} 种格式",
                    preset.chapter,
                    preset.exports.len()
                );
                presets.push(preset);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(presets)
}
