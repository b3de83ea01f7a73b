//! 组件定义注册表

use di_abstractions::{BeanDefinitionRegistry, ScanOutcome};
use infrastructure_common::{
    ComponentDescriptor, ContainerError, ContainerResult, DuplicateNamePolicy, LoadError,
};
use std::collections::HashMap;
use tracing::{info, warn};

/// 注册表装配结果
#[derive(Debug)]
pub struct Assembly {
    /// 装配完成的注册表
    pub registry: BeanDefinitionMap,
    /// 扫描时被跳过的单元
    pub skipped: Vec<LoadError>,
}

/// 名称到组件描述符的注册表
///
/// 只能通过 [`BeanDefinitionMap::assemble`] 一次性构建，之后只读。
#[derive(Debug, Default)]
pub struct BeanDefinitionMap {
    definitions: HashMap<String, ComponentDescriptor>,
}

impl BeanDefinitionMap {
    /// 由扫描结果装配注册表
    ///
    /// 成功项按名称写入，失败项收集到 [`Assembly::skipped`]。重复名称按
    /// `policy` 处理：`Reject` 返回 [`ContainerError::DuplicateName`]，
    /// `LastWins` 保留最后一个。
    pub fn assemble(outcome: ScanOutcome, policy: DuplicateNamePolicy) -> ContainerResult<Assembly> {
        let mut definitions: HashMap<String, ComponentDescriptor> = HashMap::new();
        let mut skipped = Vec::new();

        for item in outcome {
            let descriptor = match item {
                Ok(descriptor) => descriptor,
                Err(e) => {
                    skipped.push(e);
                    continue;
                }
            };

            if let Some(existing) = definitions.get(&descriptor.name) {
                match policy {
                    DuplicateNamePolicy::Reject => {
                        return Err(ContainerError::DuplicateName {
                            name: descriptor.name.clone(),
                            existing: existing.qualified_name.clone(),
                            incoming: descriptor.qualified_name,
                        });
                    }
                    DuplicateNamePolicy::LastWins => warn!(
                        "组件名称 {} 重复，{} 覆盖 {}",
                        descriptor.name, descriptor.qualified_name, existing.qualified_name
                    ),
                }
            }
            definitions.insert(descriptor.name.clone(), descriptor);
        }

        if !skipped.is_empty() {
            warn!("共有 {} 个单元加载失败被跳过", skipped.len());
        }
        info!("组件注册表装配完成，共 {} 个组件", definitions.len());

        Ok(Assembly {
            registry: Self { definitions },
            skipped,
        })
    }

    /// 遍历所有描述符
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentDescriptor)> {
        self.definitions
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }
}

impl BeanDefinitionRegistry for BeanDefinitionMap {
    fn descriptor(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.definitions.get(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.definitions.keys().cloned().collect();
        names.sort();
        names
    }

    fn len(&self) -> usize {
        self.definitions.len()
    }
}
