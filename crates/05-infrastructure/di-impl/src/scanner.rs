//! 命名空间组件扫描器

use di_abstractions::{ComponentScanner, ScanOutcome};
use infrastructure_common::{
    is_valid_namespace, qualify, uncapitalize, ComponentDescriptor, DiscoveryError, LoadError,
    Scope, TypeHandle, UnitSource, PROTOTYPE_SCOPE, SINGLETON_SCOPE,
};
use tracing::{debug, info, warn};

/// 命名空间扫描器
///
/// 列出根命名空间下的直接条目，筛选出单元后缀匹配的条目并逐个加载，
/// 只保留带组件标记的类型。单个条目加载失败只记录日志，不中止扫描。
#[derive(Debug)]
pub struct NamespaceScanner<S> {
    source: S,
}

impl<S: UnitSource> NamespaceScanner<S> {
    /// 创建新的扫描器
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 检查单个单元，得到组件描述符
    ///
    /// 未带组件标记时返回 `None`。
    fn describe(
        &self,
        handle: &TypeHandle,
        qualified_name: &str,
        base_name: &str,
    ) -> Option<Result<ComponentDescriptor, LoadError>> {
        let marker = handle.component?;

        let Some(constructor) = handle.constructor() else {
            return Some(Err(LoadError::NotConstructible {
                qualified_name: qualified_name.to_string(),
            }));
        };

        let name = if marker.has_explicit_name() {
            marker.value.to_string()
        } else {
            uncapitalize(base_name)
        };

        let scope_tag = handle.scope.map_or(SINGLETON_SCOPE, |scope| scope.value);
        if scope_tag != SINGLETON_SCOPE && scope_tag != PROTOTYPE_SCOPE {
            warn!(
                "组件 {} 的作用域标签 '{}' 未知，按原型处理",
                qualified_name, scope_tag
            );
        }

        Some(Ok(ComponentDescriptor::new(
            handle.type_info.clone(),
            qualified_name,
            name,
            Scope::from_tag(scope_tag),
            constructor,
        )))
    }
}

impl<S: UnitSource> ComponentScanner for NamespaceScanner<S> {
    fn scan(&self, root_namespace: &str) -> Result<ScanOutcome, DiscoveryError> {
        if !is_valid_namespace(root_namespace) {
            return Err(DiscoveryError::InvalidNamespace {
                namespace: root_namespace.to_string(),
            });
        }

        let location = self.source.locate(root_namespace).ok_or_else(|| {
            DiscoveryError::LocationNotFound {
                namespace: root_namespace.to_string(),
            }
        })?;
        debug!("开始扫描: {} ({})", root_namespace, location);

        let suffix = self.source.unit_suffix();
        let mut outcome = ScanOutcome::new();

        for entry in self.source.list(&location)? {
            let Some(base_name) = entry.strip_suffix(suffix) else {
                debug!("跳过非单元条目: {}", entry);
                continue;
            };
            if base_name.is_empty() {
                continue;
            }

            let qualified_name = qualify(root_namespace, base_name);
            let handle = match self.source.load(&qualified_name) {
                Ok(handle) => handle,
                Err(e) => {
                    warn!("加载单元失败，已跳过: {}", e);
                    outcome.push(Err(e));
                    continue;
                }
            };

            match self.describe(&handle, &qualified_name, base_name) {
                Some(Ok(descriptor)) => {
                    debug!(
                        "发现组件: {} -> {} ({})",
                        qualified_name, descriptor.name, descriptor.scope
                    );
                    outcome.push(Ok(descriptor));
                }
                Some(Err(e)) => {
                    warn!("组件不可构造，已跳过: {}", e);
                    outcome.push(Err(e));
                }
                None => debug!("单元未标记为组件: {}", qualified_name),
            }
        }

        info!(
            "扫描 {} 完成，发现 {} 个候选组件",
            root_namespace,
            outcome.len()
        );
        Ok(outcome)
    }

    fn name(&self) -> &str {
        self.source.name()
    }
}
