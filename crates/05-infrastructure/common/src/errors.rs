//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

/// 组件发现错误类型
///
/// 扫描根本身无法使用时返回，属于结构性错误，会中止容器构建。
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("扫描命名空间无效: '{namespace}'")]
    InvalidNamespace { namespace: String },

    #[error("扫描命名空间没有可浏览的位置: {namespace}")]
    LocationNotFound { namespace: String },

    #[error("无法列出位置 {location}: {source}")]
    ListFailed {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("单元源 {source_name} 不支持该位置: {location}")]
    UnsupportedLocation {
        source_name: String,
        location: String,
    },
}

/// 单元加载错误类型
///
/// 针对单个候选单元，扫描器记录后跳过，不会中止整个扫描。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("找不到单元: {qualified_name}")]
    UnitNotFound { qualified_name: String },

    #[error("组件缺少无参构造器: {qualified_name}")]
    NotConstructible { qualified_name: String },
}

impl LoadError {
    /// 出错单元的完整名称
    pub fn qualified_name(&self) -> &str {
        match self {
            Self::UnitNotFound { qualified_name } | Self::NotConstructible { qualified_name } => {
                qualified_name
            }
        }
    }
}

/// 组件实例创建错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("组件创建失败: {name}, 原因: {message}")]
pub struct ConstructionError {
    /// 组件名称
    pub name: String,
    /// 失败原因
    pub message: String,
}

impl ConstructionError {
    /// 创建新的构造错误
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// 容器错误类型
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("组件发现失败: {source}")]
    Discovery {
        #[from]
        source: DiscoveryError,
    },

    #[error("组件名称重复: {name} ({existing} 与 {incoming})")]
    DuplicateName {
        name: String,
        existing: String,
        incoming: String,
    },

    #[error("组件未注册: {name}")]
    NotFound { name: String },

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error("组件类型不匹配: {name}, 期望 {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },
}

impl ContainerError {
    /// 创建未注册错误
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ContainerResult<T> = Result<T, ContainerError>;
