//! 组件注册表抽象接口

use infrastructure_common::ComponentDescriptor;

/// 组件定义注册表 trait
///
/// 名称到组件描述符的只读映射，容器构建完成后不再变化。
pub trait BeanDefinitionRegistry: Send + Sync {
    /// 按名称获取描述符
    fn descriptor(&self, name: &str) -> Option<&ComponentDescriptor>;

    /// 检查名称是否已注册
    fn contains(&self, name: &str) -> bool {
        self.descriptor(name).is_some()
    }

    /// 所有已注册名称，按字母排序
    fn names(&self) -> Vec<String>;

    /// 已注册组件数量
    fn len(&self) -> usize;

    /// 注册表是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
