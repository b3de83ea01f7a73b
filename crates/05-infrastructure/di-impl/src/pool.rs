//! 单例池

use crate::registry::BeanDefinitionMap;
use di_abstractions::BeanFactory;
use infrastructure_common::{
    BeanInstance, ConstructionError, ContainerResult, SingletonFailurePolicy,
};
use std::collections::HashMap;
use tracing::{debug, error, info};

/// 单例池
///
/// 只包含单例组件的实例，在容器构建时一次性填充，之后只读。
/// 创建失败的单例不进入池中，其错误被保留下来供查找时返回。
#[derive(Debug, Default)]
pub struct SingletonPool {
    instances: HashMap<String, BeanInstance>,
    failures: HashMap<String, ConstructionError>,
}

impl SingletonPool {
    /// 为注册表中的所有单例创建实例
    pub fn populate(
        registry: &BeanDefinitionMap,
        factory: &dyn BeanFactory,
        policy: SingletonFailurePolicy,
    ) -> ContainerResult<Self> {
        let mut pool = Self::default();

        for (name, descriptor) in registry.iter() {
            if !descriptor.is_singleton() {
                debug!("原型组件 {} 延迟到查找时创建", name);
                continue;
            }

            match factory.create_bean(descriptor) {
                Ok(instance) => {
                    debug!("单例 {} 已创建", name);
                    pool.instances.insert(name.to_string(), instance);
                }
                Err(e) => match policy {
                    SingletonFailurePolicy::Abort => return Err(e.into()),
                    SingletonFailurePolicy::Defer => {
                        error!("单例 {} 创建失败，查找时将返回错误: {}", name, e);
                        pool.failures.insert(name.to_string(), e);
                    }
                },
            }
        }

        info!(
            "单例池初始化完成: {} 个实例, {} 个失败",
            pool.instances.len(),
            pool.failures.len()
        );
        Ok(pool)
    }

    /// 获取单例实例
    pub fn get(&self, name: &str) -> Option<&BeanInstance> {
        self.instances.get(name)
    }

    /// 获取单例创建失败的错误
    pub fn failure(&self, name: &str) -> Option<&ConstructionError> {
        self.failures.get(name)
    }

    /// 池中所有单例名称，按字母排序
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.instances.keys().cloned().collect();
        names.sort();
        names
    }

    /// 池中实例数量
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// 池是否为空
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
