use crate::infrastructure::navigator::NavigationMode;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 生成服务地址（不带结尾的 `/`）
    pub api_base_url: String,
    /// 请求预设（TOML）存放目录
    pub request_folder: String,
    /// 下载文件保存目录
    pub download_dir: String,
    /// 下载导航方式
    pub navigation_mode: NavigationMode,
    /// 浏览器调试端口（仅 browser 模式使用）
    pub browser_debug_port: u16,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            request_folder: "requests".to_string(),
            download_dir: "downloads".to_string(),
            navigation_mode: NavigationMode::Download,
            browser_debug_port: 9222,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(default.api_base_url),
            request_folder: std::env::var("REQUEST_FOLDER").unwrap_or(default.request_folder),
            download_dir: std::env::var("DOWNLOAD_DIR").unwrap_or(default.download_dir),
            navigation_mode: std::env::var("NAVIGATION_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.navigation_mode),
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.browser_debug_port),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
