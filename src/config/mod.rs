/// 统一配置系统
///
/// 提供TOML/JSON配置文件加载、校验和默认值
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod camera;
pub mod exhaust;
pub mod rocket;

pub use camera::CameraConfig;
pub use exhaust::ExhaustTuning;
pub use rocket::RocketPhysicsConfig;

use crate::impl_default;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 演示场景主配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 尾焰粒子调参
    #[serde(default)]
    pub exhaust: ExhaustTuning,

    /// 火箭物理参数
    #[serde(default)]
    pub physics: RocketPhysicsConfig,

    /// 跟随相机参数
    #[serde(default)]
    pub camera: CameraConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl_default!(DemoConfig {
    exhaust: ExhaustTuning::default(),
    physics: RocketPhysicsConfig::default(),
    camera: CameraConfig::default(),
    logging: LoggingConfig::default(),
});

impl DemoConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 按扩展名从文件加载 (`.toml` 或 `.json`)
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.exhaust.validate()?;
        self.physics.validate()?;
        self.camera.validate()?;
        Ok(())
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别 (例如 "info", "debug", "rocket_exhaust=trace")
    pub level: String,
}

impl_default!(LoggingConfig {
    level: "info".to_string(),
});
