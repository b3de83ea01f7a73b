//! 组件容器抽象接口
//!
//! 容器启动后对外提供的查找接口

use infrastructure_common::{BeanInstance, ContainerError, ContainerResult};
use std::any::Any;
use std::sync::Arc;

/// 组件容器 trait
pub trait BeanContainer: Send + Sync {
    /// 按名称获取组件实例
    ///
    /// - 名称未注册时返回 [`ContainerError::NotFound`]
    /// - 单例组件每次返回同一个实例
    /// - 原型组件每次返回新创建的实例
    fn get_bean(&self, name: &str) -> ContainerResult<BeanInstance>;

    /// 检查名称是否已注册
    fn contains_bean(&self, name: &str) -> bool;

    /// 名称对应的组件是否为单例
    fn is_singleton(&self, name: &str) -> ContainerResult<bool>;

    /// 所有已注册名称，按字母排序
    fn bean_names(&self) -> Vec<String>;
}

/// 组件容器扩展方法
pub trait BeanContainerExt: BeanContainer {
    /// 按名称获取指定类型的组件实例
    fn get_bean_as<T>(&self, name: &str) -> ContainerResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.get_bean(name)?
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }
}

impl<C: BeanContainer + ?Sized> BeanContainerExt for C {}
