//! 应用上下文
//!
//! 容器根对象：按 扫描 -> 注册表 -> 单例池 的顺序完成构建，然后对外提供
//! 按名称查找组件的接口。

use crate::factory::DefaultBeanFactory;
use crate::pool::SingletonPool;
use crate::registry::BeanDefinitionMap;
use crate::scanner::NamespaceScanner;
use di_abstractions::{BeanContainer, BeanDefinitionRegistry, BeanFactory, ComponentScanner};
use infrastructure_common::{
    BeanInstance, ComponentDescriptor, ConstructionError, ContainerError, ContainerResult,
    ContainerSettings, DirectoryUnitSource, LoadError, ScanConfiguration, TypeCatalog, UnitSource,
};
use std::fmt;
use tracing::{debug, info};

/// 应用上下文
///
/// 独占注册表和单例池，构建完成后二者都不再变化，因此可以通过 `Arc`
/// 在线程之间共享。
pub struct ApplicationContext {
    settings: ContainerSettings,
    registry: BeanDefinitionMap,
    singletons: SingletonPool,
    factory: Box<dyn BeanFactory>,
    skipped: Vec<LoadError>,
}

impl ApplicationContext {
    /// 使用扫描配置类型创建上下文，发现源为全局类型目录
    pub fn new<C: ScanConfiguration>() -> ContainerResult<Self> {
        Self::with_source(
            ContainerSettings::from_configuration::<C>(),
            TypeCatalog::global(),
        )
    }

    /// 使用容器配置创建上下文
    ///
    /// 配置了目录查找路径时使用 [`DirectoryUnitSource`]，否则使用全局类型目录。
    pub fn from_settings(settings: ContainerSettings) -> ContainerResult<Self> {
        if settings.unit_roots.is_empty() {
            return Self::with_source(settings, TypeCatalog::global());
        }

        let source = DirectoryUnitSource::new(TypeCatalog::global())
            .with_roots(settings.unit_roots.clone())
            .with_suffix(settings.unit_suffix.clone());
        Self::with_source(settings, source)
    }

    /// 使用指定的发现源创建上下文
    pub fn with_source<S: UnitSource>(
        settings: ContainerSettings,
        source: S,
    ) -> ContainerResult<Self> {
        Self::with_factory(settings, source, Box::new(DefaultBeanFactory::new()))
    }

    /// 使用指定的发现源和组件工厂创建上下文
    pub fn with_factory<S: UnitSource>(
        settings: ContainerSettings,
        source: S,
        factory: Box<dyn BeanFactory>,
    ) -> ContainerResult<Self> {
        info!("初始化应用上下文，扫描根: {}", settings.scan_root);

        let scanner = NamespaceScanner::new(source);
        let outcome = scanner.scan(&settings.scan_root)?;
        let assembly = BeanDefinitionMap::assemble(outcome, settings.duplicate_names)?;
        let singletons = SingletonPool::populate(
            &assembly.registry,
            factory.as_ref(),
            settings.singleton_failures,
        )?;

        info!(
            "应用上下文初始化完成: {} 个组件, {} 个单例, {} 个单元被跳过",
            assembly.registry.len(),
            singletons.len(),
            assembly.skipped.len()
        );

        Ok(Self {
            settings,
            registry: assembly.registry,
            singletons,
            factory,
            skipped: assembly.skipped,
        })
    }

    /// 组件描述符
    pub fn descriptor(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.registry.descriptor(name)
    }

    /// 扫描时被跳过的单元
    pub fn skipped_units(&self) -> &[LoadError] {
        &self.skipped
    }

    /// 单例池中的实例数量
    pub fn singleton_count(&self) -> usize {
        self.singletons.len()
    }

    /// 单例池中的名称
    pub fn singleton_names(&self) -> Vec<String> {
        self.singletons.names()
    }

    /// 容器配置
    pub fn settings(&self) -> &ContainerSettings {
        &self.settings
    }
}

impl BeanContainer for ApplicationContext {
    fn get_bean(&self, name: &str) -> ContainerResult<BeanInstance> {
        let descriptor = self
            .registry
            .descriptor(name)
            .ok_or_else(|| ContainerError::not_found(name))?;

        if descriptor.is_singleton() {
            if let Some(instance) = self.singletons.get(name) {
                return Ok(instance.clone());
            }
            let failure = self
                .singletons
                .failure(name)
                .cloned()
                .unwrap_or_else(|| ConstructionError::new(name, "单例未在启动时创建"));
            return Err(failure.into());
        }

        debug!("创建原型组件: {}", name);
        Ok(self.factory.create_bean(descriptor)?)
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    fn is_singleton(&self, name: &str) -> ContainerResult<bool> {
        self.registry
            .descriptor(name)
            .map(ComponentDescriptor::is_singleton)
            .ok_or_else(|| ContainerError::not_found(name))
    }

    fn bean_names(&self) -> Vec<String> {
        self.registry.names()
    }
}

impl fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("scan_root", &self.settings.scan_root)
            .field("beans", &self.registry.names())
            .field("singletons", &self.singletons.names())
            .field("skipped", &self.skipped)
            .finish()
    }
}
