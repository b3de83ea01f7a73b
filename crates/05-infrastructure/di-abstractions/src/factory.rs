//! 组件工厂抽象接口

use infrastructure_common::{BeanInstance, ComponentDescriptor, ConstructionError};

/// 组件工厂 trait
///
/// 根据描述符调用无参构造器创建实例，不做任何依赖装配。
pub trait BeanFactory: Send + Sync {
    /// 创建组件实例
    fn create_bean(&self, descriptor: &ComponentDescriptor)
        -> Result<BeanInstance, ConstructionError>;
}
