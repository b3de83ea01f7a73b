//! 单元发现源
//!
//! 扫描器通过 [`UnitSource`] 把点分命名空间解析为可浏览的位置、列出位置下
//! 的条目，再把条目对应的完整名称加载为 [`TypeHandle`]。
//!
//! - [`TypeCatalog`] 内存中的类型目录，由 `#[component]` / `#[unit]` 宏在
//!   程序启动时填充全局实例，也可以显式构建
//! - [`DirectoryUnitSource`] 基于目录的查找路径，目录中的单元文件名指向
//!   目录加载器中的类型

use crate::component::Component;
use crate::conventions::{
    is_valid_namespace, namespace_to_path, split_qualified, DEFAULT_UNIT_SUFFIX,
    NAMESPACE_SEPARATOR,
};
use crate::errors::{DiscoveryError, LoadError};
use crate::metadata::TypeHandle;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// 可浏览的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// 类型目录中的包
    Package(String),
    /// 文件系统目录
    Directory(PathBuf),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package(namespace) => write!(f, "package:{namespace}"),
            Self::Directory(path) => write!(f, "dir:{}", path.display()),
        }
    }
}

/// 单元加载器 trait
pub trait UnitLoader: Send + Sync {
    /// 按完整名称加载单元
    fn load(&self, qualified_name: &str) -> Result<TypeHandle, LoadError>;
}

/// 单元源 trait
///
/// 扫描器查询的外部协作者，负责命名空间到位置的解析和条目列举。
pub trait UnitSource: UnitLoader {
    /// 单元源名称，用于日志
    fn name(&self) -> &str;

    /// 标识可加载单元的条目后缀
    fn unit_suffix(&self) -> &str;

    /// 解析命名空间为可浏览的位置
    fn locate(&self, namespace: &str) -> Option<Location>;

    /// 列出位置下的直接条目，按名称排序
    fn list(&self, location: &Location) -> Result<Vec<String>, DiscoveryError>;
}

impl<T: UnitLoader + ?Sized> UnitLoader for &T {
    fn load(&self, qualified_name: &str) -> Result<TypeHandle, LoadError> {
        (**self).load(qualified_name)
    }
}

impl<T: UnitSource + ?Sized> UnitSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn unit_suffix(&self) -> &str {
        (**self).unit_suffix()
    }

    fn locate(&self, namespace: &str) -> Option<Location> {
        (**self).locate(namespace)
    }

    fn list(&self, location: &Location) -> Result<Vec<String>, DiscoveryError> {
        (**self).list(location)
    }
}

impl<T: UnitLoader + ?Sized> UnitLoader for Arc<T> {
    fn load(&self, qualified_name: &str) -> Result<TypeHandle, LoadError> {
        (**self).load(qualified_name)
    }
}

impl<T: UnitSource + ?Sized> UnitSource for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn unit_suffix(&self) -> &str {
        (**self).unit_suffix()
    }

    fn locate(&self, namespace: &str) -> Option<Location> {
        (**self).locate(namespace)
    }

    fn list(&self, location: &Location) -> Result<Vec<String>, DiscoveryError> {
        (**self).list(location)
    }
}

/// 全局类型目录
static GLOBAL_TYPE_CATALOG: Lazy<TypeCatalog> = Lazy::new(TypeCatalog::new);

/// 类型目录
///
/// 以完整名称为键保存类型句柄。命名空间即点分形式的模块路径。
#[derive(Debug, Default)]
pub struct TypeCatalog {
    units: DashMap<String, TypeHandle>,
}

impl TypeCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 进程级目录，组件宏在程序启动时注册到这里
    pub fn global() -> &'static TypeCatalog {
        &GLOBAL_TYPE_CATALOG
    }

    /// 注册类型句柄，返回被替换的旧句柄
    pub fn register(&self, handle: TypeHandle) -> Option<TypeHandle> {
        let qualified_name = handle.qualified_name();
        debug!("注册单元: {}", qualified_name);
        let previous = self.units.insert(qualified_name.clone(), handle);
        if previous.is_some() {
            warn!("单元 {} 被重复注册，旧句柄已替换", qualified_name);
        }
        previous
    }

    /// 注册组件类型
    pub fn register_component<T: Component>(
        &self,
        namespace: impl Into<String>,
    ) -> Option<TypeHandle> {
        self.register(TypeHandle::component::<T>(namespace))
    }

    /// 按完整名称获取句柄
    pub fn get(&self, qualified_name: &str) -> Option<TypeHandle> {
        self.units.get(qualified_name).map(|entry| entry.value().clone())
    }

    /// 是否包含指定单元
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.units.contains_key(qualified_name)
    }

    /// 已注册单元数量
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl UnitLoader for TypeCatalog {
    fn load(&self, qualified_name: &str) -> Result<TypeHandle, LoadError> {
        self.get(qualified_name).ok_or_else(|| LoadError::UnitNotFound {
            qualified_name: qualified_name.to_string(),
        })
    }
}

impl UnitSource for TypeCatalog {
    fn name(&self) -> &str {
        "type-catalog"
    }

    fn unit_suffix(&self) -> &str {
        ""
    }

    fn locate(&self, namespace: &str) -> Option<Location> {
        if !is_valid_namespace(namespace) {
            return None;
        }
        let nested_prefix = format!("{namespace}{NAMESPACE_SEPARATOR}");
        let browsable = self.units.iter().any(|entry| {
            let unit_namespace = entry.value().namespace.as_str();
            unit_namespace == namespace || unit_namespace.starts_with(&nested_prefix)
        });
        browsable.then(|| Location::Package(namespace.to_string()))
    }

    fn list(&self, location: &Location) -> Result<Vec<String>, DiscoveryError> {
        let Location::Package(namespace) = location else {
            return Err(DiscoveryError::UnsupportedLocation {
                source_name: self.name().to_string(),
                location: location.to_string(),
            });
        };

        let mut entries: Vec<String> = self
            .units
            .iter()
            .filter_map(|entry| {
                let (unit_namespace, base_name) = split_qualified(entry.key());
                (unit_namespace == namespace).then(|| base_name.to_string())
            })
            .collect();
        entries.sort();
        Ok(entries)
    }
}

/// 基于目录的单元源
///
/// 查找路径由若干根目录组成，命名空间 `a.b.c` 对应 `<root>/a/b/c`。
/// 目录中以单元后缀结尾的文件代表一个单元，文件基础名与命名空间拼成
/// 完整名称后交给加载器解析。
#[derive(Debug, Clone)]
pub struct DirectoryUnitSource<L> {
    roots: Vec<PathBuf>,
    suffix: String,
    loader: L,
}

impl<L: UnitLoader> DirectoryUnitSource<L> {
    /// 创建新的目录单元源
    pub fn new(loader: L) -> Self {
        Self {
            roots: Vec::new(),
            suffix: DEFAULT_UNIT_SUFFIX.to_string(),
            loader,
        }
    }

    /// 添加查找根目录
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// 批量添加查找根目录
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    /// 设置单元文件后缀
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl<L: UnitLoader> UnitLoader for DirectoryUnitSource<L> {
    fn load(&self, qualified_name: &str) -> Result<TypeHandle, LoadError> {
        self.loader.load(qualified_name)
    }
}

impl<L: UnitLoader> UnitSource for DirectoryUnitSource<L> {
    fn name(&self) -> &str {
        "directory"
    }

    fn unit_suffix(&self) -> &str {
        &self.suffix
    }

    fn locate(&self, namespace: &str) -> Option<Location> {
        if !is_valid_namespace(namespace) {
            return None;
        }
        let relative = namespace_to_path(namespace);
        self.roots
            .iter()
            .map(|root| root.join(&relative))
            .find(|candidate| candidate.is_dir())
            .map(Location::Directory)
    }

    fn list(&self, location: &Location) -> Result<Vec<String>, DiscoveryError> {
        let Location::Directory(path) = location else {
            return Err(DiscoveryError::UnsupportedLocation {
                source_name: self.name().to_string(),
                location: location.to_string(),
            });
        };
        list_files(path)
    }
}

/// 列出目录中的普通文件，不进入子目录
fn list_files(path: &Path) -> Result<Vec<String>, DiscoveryError> {
    let list_failed = |source| DiscoveryError::ListFailed {
        location: path.display().to_string(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(path).map_err(list_failed)? {
        let entry = entry.map_err(list_failed)?;
        if !entry.file_type().map_err(list_failed)?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(file_name) => entries.push(file_name),
            Err(raw) => warn!("忽略非 UTF-8 文件名: {:?}", raw),
        }
    }
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{BoxError, ComponentMarker, Constructible};
    use std::fs;

    #[derive(Debug)]
    struct Alpha;

    impl Constructible for Alpha {
        fn construct() -> Result<Self, BoxError> {
            Ok(Self)
        }
    }

    impl Component for Alpha {
        const COMPONENT: ComponentMarker = ComponentMarker::new("");
    }

    #[derive(Debug)]
    struct Nested;

    fn catalog() -> TypeCatalog {
        let catalog = TypeCatalog::new();
        catalog.register_component::<Alpha>("app.beans");
        catalog.register(TypeHandle::of::<Nested>("app.beans.inner"));
        catalog
    }

    #[test]
    fn test_catalog_locate() {
        let catalog = catalog();
        assert_eq!(
            catalog.locate("app.beans"),
            Some(Location::Package("app.beans".to_string()))
        );
        // 只包含子包的命名空间同样可浏览
        assert!(catalog.locate("app").is_some());
        assert!(catalog.locate("app.be").is_none());
        assert!(catalog.locate("missing").is_none());
        assert!(catalog.locate("").is_none());
    }

    #[test]
    fn test_catalog_list_is_not_recursive() {
        let catalog = catalog();
        let location = catalog.locate("app.beans").unwrap();
        assert_eq!(catalog.list(&location).unwrap(), vec!["Alpha".to_string()]);

        let root = catalog.locate("app").unwrap();
        assert!(catalog.list(&root).unwrap().is_empty());
    }

    #[test]
    fn test_catalog_load() {
        let catalog = catalog();
        assert!(catalog.load("app.beans.Alpha").unwrap().is_component());
        assert_eq!(
            catalog.load("app.beans.Gone").unwrap_err(),
            LoadError::UnitNotFound {
                qualified_name: "app.beans.Gone".to_string()
            }
        );
    }

    #[test]
    fn test_catalog_register_replaces() {
        let catalog = TypeCatalog::new();
        assert!(catalog.register(TypeHandle::of::<Alpha>("app")).is_none());
        assert!(catalog.register_component::<Alpha>("app").is_some());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("app.Alpha").unwrap().is_component());
    }

    #[test]
    fn test_directory_locate_and_list() {
        let root = tempfile::tempdir().unwrap();
        let package = root.path().join("app").join("beans");
        fs::create_dir_all(package.join("sub")).unwrap();
        fs::write(package.join("Beta.unit"), "").unwrap();
        fs::write(package.join("Alpha.unit"), "").unwrap();
        fs::write(package.join("README.md"), "").unwrap();

        let source = DirectoryUnitSource::new(TypeCatalog::new())
            .with_root(root.path().join("missing"))
            .with_root(root.path());

        let location = source.locate("app.beans").unwrap();
        assert_eq!(location, Location::Directory(package));
        assert_eq!(
            source.list(&location).unwrap(),
            vec!["Alpha.unit", "Beta.unit", "README.md"]
        );
        assert!(source.locate("app.nothing").is_none());
    }

    #[test]
    fn test_directory_list_failure() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("Alpha.unit");
        fs::write(&file, "").unwrap();

        let source = DirectoryUnitSource::new(TypeCatalog::new()).with_root(root.path());
        let err = source.list(&Location::Directory(file.clone())).unwrap_err();
        match err {
            DiscoveryError::ListFailed { location, .. } => {
                assert_eq!(location, file.display().to_string());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_directory_rejects_package_location() {
        let source = DirectoryUnitSource::new(TypeCatalog::new());
        let err = source
            .list(&Location::Package("app".to_string()))
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::UnsupportedLocation { .. }));
    }
}
