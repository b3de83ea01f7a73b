//! 组件作用域

use std::fmt;

/// 单例作用域标签，同时也是缺省作用域
pub const SINGLETON_SCOPE: &str = "singleton";

/// 原型作用域标签
pub const PROTOTYPE_SCOPE: &str = "prototype";

/// 组件作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// 单例模式 - 容器启动时创建，所有调用方共享同一实例
    #[default]
    Singleton,
    /// 原型模式 - 每次查找都创建新实例
    Prototype,
}

impl Scope {
    /// 由作用域标签得到作用域
    ///
    /// 只有精确等于 `"singleton"` 的标签是单例，其余标签一律按原型处理。
    pub fn from_tag(tag: &str) -> Self {
        if tag == SINGLETON_SCOPE {
            Self::Singleton
        } else {
            Self::Prototype
        }
    }

    /// 作用域标签
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Singleton => SINGLETON_SCOPE,
            Self::Prototype => PROTOTYPE_SCOPE,
        }
    }

    /// 是否为单例
    pub fn is_singleton(&self) -> bool {
        matches!(self, Self::Singleton)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
