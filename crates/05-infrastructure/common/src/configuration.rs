//! 容器配置
//!
//! 扫描配置类型 ([`ScanConfiguration`]) 提供扫描根命名空间；
//! [`ContainerSettings`] 是可以从 TOML 文件和环境变量加载的完整配置。

use crate::conventions::{is_valid_namespace, DEFAULT_UNIT_SUFFIX};
use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 环境变量前缀，例如 `BEANS__SCAN_ROOT`
pub const ENV_PREFIX: &str = "BEANS";

/// 扫描配置 trait
///
/// 容器构造时读取的声明式配置，`#[component_scan("a.b.c")]` 宏会生成实现。
pub trait ScanConfiguration: 'static {
    /// 扫描根命名空间
    const SCAN_ROOT: &'static str;
}

/// 重复组件名称的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateNamePolicy {
    /// 遇到重复名称时中止容器构建
    #[default]
    Reject,
    /// 后注册的组件覆盖先注册的组件
    LastWins,
}

/// 单例创建失败的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingletonFailurePolicy {
    /// 记录失败，查找该组件时返回错误
    #[default]
    Defer,
    /// 中止容器构建
    Abort,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// 日志级别或 env-filter 表达式
    pub level: String,
    /// 是否输出 JSON 格式
    pub json: bool,
    /// 是否显示 target
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            show_target: true,
            show_thread_ids: false,
        }
    }
}

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSettings {
    /// 扫描根命名空间
    pub scan_root: String,
    /// 重复名称策略
    pub duplicate_names: DuplicateNamePolicy,
    /// 单例失败策略
    pub singleton_failures: SingletonFailurePolicy,
    /// 目录查找路径，为空时使用全局类型目录
    pub unit_roots: Vec<PathBuf>,
    /// 单元文件后缀
    pub unit_suffix: String,
    /// 日志配置
    pub logging: LoggingSettings,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self {
            scan_root: String::new(),
            duplicate_names: DuplicateNamePolicy::default(),
            singleton_failures: SingletonFailurePolicy::default(),
            unit_roots: Vec::new(),
            unit_suffix: DEFAULT_UNIT_SUFFIX.to_string(),
            logging: LoggingSettings::default(),
        }
    }
}

impl ContainerSettings {
    /// 指定扫描根的缺省配置
    pub fn for_root(scan_root: impl Into<String>) -> Self {
        Self {
            scan_root: scan_root.into(),
            ..Self::default()
        }
    }

    /// 从扫描配置类型创建
    pub fn from_configuration<C: ScanConfiguration>() -> Self {
        Self::for_root(C::SCAN_ROOT)
    }

    /// 设置重复名称策略
    pub fn with_duplicate_names(mut self, policy: DuplicateNamePolicy) -> Self {
        self.duplicate_names = policy;
        self
    }

    /// 设置单例失败策略
    pub fn with_singleton_failures(mut self, policy: SingletonFailurePolicy) -> Self {
        self.singleton_failures = policy;
        self
    }

    /// 添加目录查找根
    pub fn with_unit_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.unit_roots.push(root.into());
        self
    }

    /// 从配置文件加载，环境变量 `BEANS__*` 优先
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("加载容器配置: {}", path.display());

        let settings: Self = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| ConfigError::ParseError {
                source: Box::new(e),
            })?;

        settings.validate()?;
        Ok(settings)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !is_valid_namespace(&self.scan_root) {
            return Err(ConfigError::validation(format!(
                "scan_root 不是有效的命名空间: '{}'",
                self.scan_root
            )));
        }
        if !self.unit_suffix.starts_with('.') {
            return Err(ConfigError::validation(format!(
                "unit_suffix 必须以 '.' 开头: '{}'",
                self.unit_suffix
            )));
        }
        Ok(())
    }
}
