//! 元数据定义
//!
//! 提供类型信息和可加载单元的类型句柄

use crate::component::{
    erased_constructor, Component, ComponentMarker, Constructible, Constructor, ScopeMarker,
};
use crate::conventions::qualify;
use std::any::TypeId;
use std::fmt;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型简单名称
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 完整类型路径
    pub type_path: &'static str,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: 'static>() -> Self {
        let type_path = std::any::type_name::<T>();
        Self {
            name: short_type_name(type_path).to_string(),
            id: TypeId::of::<T>(),
            type_path,
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        &self.name
    }
}

fn short_type_name(type_path: &str) -> &str {
    // 去掉泛型参数后再取最后一段
    let base = type_path.split('<').next().unwrap_or(type_path);
    base.rsplit("::").next().unwrap_or(base)
}

/// 类型句柄
///
/// 单元源加载出来的结果：类型信息、所在命名空间、组件/作用域标记以及
/// 可选的无参构造器。
#[derive(Clone)]
pub struct TypeHandle {
    /// 类型信息
    pub type_info: TypeInfo,
    /// 点分形式的命名空间
    pub namespace: String,
    /// 组件标记，`None` 表示普通类型
    pub component: Option<ComponentMarker>,
    /// 作用域标记
    pub scope: Option<ScopeMarker>,
    constructor: Option<Constructor>,
}

impl TypeHandle {
    /// 普通类型句柄，不带标记也不可构造
    pub fn of<T: 'static>(namespace: impl Into<String>) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            namespace: namespace.into(),
            component: None,
            scope: None,
            constructor: None,
        }
    }

    /// 可构造类型句柄
    pub fn constructible<T: Constructible>(namespace: impl Into<String>) -> Self {
        Self {
            constructor: Some(erased_constructor::<T>),
            ..Self::of::<T>(namespace)
        }
    }

    /// 组件类型句柄，标记取自 [`Component`] 的关联常量
    pub fn component<T: Component>(namespace: impl Into<String>) -> Self {
        Self {
            component: Some(T::COMPONENT),
            scope: T::SCOPE,
            ..Self::constructible::<T>(namespace)
        }
    }

    /// 设置组件标记
    pub fn with_component(mut self, marker: ComponentMarker) -> Self {
        self.component = Some(marker);
        self
    }

    /// 设置作用域标记
    pub fn with_scope(mut self, marker: ScopeMarker) -> Self {
        self.scope = Some(marker);
        self
    }

    /// 类型简单名称
    pub fn simple_name(&self) -> &str {
        self.type_info.short_name()
    }

    /// 完整名称 `<namespace>.<simple name>`
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, self.simple_name())
    }

    /// 是否带有组件标记
    pub fn is_component(&self) -> bool {
        self.component.is_some()
    }

    /// 无参构造器
    pub fn constructor(&self) -> Option<Constructor> {
        self.constructor
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandle")
            .field("type_info", &self.type_info)
            .field("namespace", &self.namespace)
            .field("component", &self.component)
            .field("scope", &self.scope)
            .field("constructible", &self.constructor.is_some())
            .finish()
    }
}
