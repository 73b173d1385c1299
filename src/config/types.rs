//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::SplitMode;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 分章配置
    #[serde(default)]
    pub splitter: SplitterConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 分章配置
#[derive(Debug, Clone, Deserialize)]
pub struct SplitterConfig {
    /// 请求未指定时的分章模式
    /// 可选: chapter, charCount
    #[serde(default)]
    pub default_mode: SplitMode,

    /// 请求未指定时的目标字数
    #[serde(default = "default_target_chars")]
    pub default_target_chars: usize,

    /// 目标字数上限
    #[serde(default = "default_max_target_chars")]
    pub max_target_chars: usize,

    /// 单次分章的文本字数上限
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
}

fn default_target_chars() -> usize {
    3000
}

fn default_max_target_chars() -> usize {
    100_000
}

fn default_max_text_chars() -> usize {
    20_000_000
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            default_mode: SplitMode::Chapter,
            default_target_chars: default_target_chars(),
            max_target_chars: default_max_target_chars(),
            max_text_chars: default_max_text_chars(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 上传文件最大大小（字节），默认 50MB
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: u64,
}

fn default_max_upload_size() -> u64 {
    50 * 1024 * 1024 // 50 MB
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_upload_size: default_max_upload_size(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
