//! 组件基础接口定义
//!
//! 提供组件标记、无参构造能力以及组件描述符

use crate::errors::ConstructionError;
use crate::lifecycle::Scope;
use crate::metadata::TypeInfo;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 容器中的组件实例
pub type BeanInstance = Arc<dyn Any + Send + Sync>;

/// 构造器返回的通用错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 类型擦除后的无参构造器
pub type Constructor = fn() -> Result<BeanInstance, BoxError>;

/// 无参构造能力
///
/// 所有能被容器实例化的类型都必须实现此 trait，`#[component]` 宏会基于
/// `Default` 或指定的构造函数自动生成实现。
pub trait Constructible: Send + Sync + Sized + 'static {
    /// 创建新实例
    fn construct() -> Result<Self, BoxError>;
}

/// 组件 trait
///
/// 带有组件标记的类型，标记以关联常量的形式在编译期确定。
pub trait Component: Constructible {
    /// 组件标记
    const COMPONENT: ComponentMarker;

    /// 作用域标记，缺省表示单例
    const SCOPE: Option<ScopeMarker> = None;
}

/// 组件标记
///
/// `value` 为空时组件名称由类型简单名推导。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentMarker {
    pub value: &'static str,
}

impl ComponentMarker {
    /// 创建组件标记
    pub const fn new(value: &'static str) -> Self {
        Self { value }
    }

    /// 是否带有显式名称
    pub fn has_explicit_name(&self) -> bool {
        !self.value.is_empty()
    }
}

/// 作用域标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeMarker {
    pub value: &'static str,
}

impl ScopeMarker {
    /// 创建作用域标记
    pub const fn new(value: &'static str) -> Self {
        Self { value }
    }
}

/// 将具体类型的构造结果擦除为 [`BeanInstance`]
pub fn erased_constructor<T: Constructible>() -> Result<BeanInstance, BoxError> {
    T::construct().map(|instance| Arc::new(instance) as BeanInstance)
}

/// 组件描述符
///
/// 扫描器对单个单元的检查结果：类型、逻辑名称和作用域。
#[derive(Clone)]
pub struct ComponentDescriptor {
    /// 组件类型信息
    pub type_info: TypeInfo,
    /// 加载该单元时使用的完整名称
    pub qualified_name: String,
    /// 组件逻辑名称
    pub name: String,
    /// 组件作用域
    pub scope: Scope,
    constructor: Constructor,
}

impl ComponentDescriptor {
    /// 创建新的组件描述符
    pub fn new(
        type_info: TypeInfo,
        qualified_name: impl Into<String>,
        name: impl Into<String>,
        scope: Scope,
        constructor: Constructor,
    ) -> Self {
        Self {
            type_info,
            qualified_name: qualified_name.into(),
            name: name.into(),
            scope,
            constructor,
        }
    }

    /// 调用无参构造器
    pub fn instantiate(&self) -> Result<BeanInstance, ConstructionError> {
        (self.constructor)().map_err(|e| ConstructionError::new(&self.name, e.to_string()))
    }

    /// 是否为单例
    pub fn is_singleton(&self) -> bool {
        self.scope.is_singleton()
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("qualified_name", &self.qualified_name)
            .field("scope", &self.scope)
            .field("type_info", &self.type_info)
            .field("constructor", &"<function>")
            .finish()
    }
}
