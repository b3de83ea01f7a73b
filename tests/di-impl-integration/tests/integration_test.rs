//! 目录单元源与配置文件驱动的集中集成测试

use di_abstractions::{BeanContainer, BeanContainerExt};
use di_impl::{init_logging, ApplicationContext};
use infrastructure_common::{
    BoxError, Component, ComponentMarker, ConfigError, Constructible, ContainerError,
    ContainerSettings, LoadError, LoggingSettings, ScopeMarker, TypeCatalog, TypeHandle,
};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Once};
use tempfile::TempDir;

const NAMESPACE: &str = "shop.services";

/// 库存服务，单例
#[derive(Debug)]
struct InventoryService {
    stock: u32,
}

impl Constructible for InventoryService {
    fn construct() -> Result<Self, BoxError> {
        Ok(Self { stock: 42 })
    }
}

impl Component for InventoryService {
    const COMPONENT: ComponentMarker = ComponentMarker::new("");
}

/// 购物车，原型
#[derive(Debug, Default)]
struct Cart {
    items: Vec<String>,
}

impl Constructible for Cart {
    fn construct() -> Result<Self, BoxError> {
        Ok(Self::default())
    }
}

impl Component for Cart {
    const COMPONENT: ComponentMarker = ComponentMarker::new("shoppingCart");
    const SCOPE: Option<ScopeMarker> = Some(ScopeMarker::new("prototype"));
}

/// 未标记的工具类型
#[derive(Debug)]
struct PriceFormatter;

static REGISTER: Once = Once::new();

fn register_units() {
    REGISTER.call_once(|| {
        let catalog = TypeCatalog::global();
        catalog.register_component::<InventoryService>(NAMESPACE);
        catalog.register_component::<Cart>(NAMESPACE);
        catalog.register(TypeHandle::of::<PriceFormatter>(NAMESPACE));
    });
}

fn touch(dir: &Path, file_name: &str) {
    fs::write(dir.join(file_name), b"").unwrap();
}

/// 布置单元文件：三个已注册单元、一个缺失单元、一个非单元文件和一个子目录
fn unit_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let services = temp.path().join("shop").join("services");
    fs::create_dir_all(services.join("internal")).unwrap();

    touch(&services, "InventoryService.unit");
    touch(&services, "Cart.unit");
    touch(&services, "PriceFormatter.unit");
    touch(&services, "Discontinued.unit");
    touch(&services, "notes.txt");
    touch(&services.join("internal"), "Cart.unit");
    temp
}

#[test]
fn test_directory_scenario_from_settings() -> anyhow::Result<()> {
    register_units();
    let tree = unit_tree();

    let settings = ContainerSettings::for_root(NAMESPACE).with_unit_root(tree.path());
    let context = ApplicationContext::from_settings(settings)?;

    assert_eq!(context.bean_names(), vec!["inventoryService", "shoppingCart"]);
    assert_eq!(
        context.skipped_units(),
        &[LoadError::UnitNotFound {
            qualified_name: "shop.services.Discontinued".to_string()
        }]
    );

    let inventory = context.get_bean_as::<InventoryService>("inventoryService")?;
    assert_eq!(inventory.stock, 42);
    assert!(Arc::ptr_eq(
        &context.get_bean("inventoryService")?,
        &context.get_bean("inventoryService")?
    ));

    let cart = context.get_bean_as::<Cart>("shoppingCart")?;
    assert!(cart.items.is_empty());
    assert!(!context.is_singleton("shoppingCart")?);

    assert!(matches!(
        context.get_bean("priceFormatter"),
        Err(ContainerError::NotFound { .. })
    ));
    Ok(())
}

#[test]
fn test_settings_file_with_unit_roots() -> anyhow::Result<()> {
    register_units();
    let tree = unit_tree();
    let config_dir = TempDir::new()?;
    let config_path = config_dir.path().join("container.toml");
    fs::write(
        &config_path,
        format!(
            "scan_root = \"{NAMESPACE}\"\nunit_roots = ['{}']\n\n[logging]\nlevel = \"warn\"\n",
            tree.path().display()
        ),
    )?;

    let settings = ContainerSettings::load(&config_path)?;
    assert_eq!(settings.unit_roots.len(), 1);
    let _ = init_logging(&settings.logging);

    let context = ApplicationContext::from_settings(settings)?;
    assert_eq!(context.bean_names().len(), 2);
    assert_eq!(context.skipped_units().len(), 1);
    Ok(())
}

#[test]
fn test_missing_unit_root_directory() {
    register_units();
    let empty = TempDir::new().unwrap();

    let settings = ContainerSettings::for_root(NAMESPACE).with_unit_root(empty.path());
    let err = ApplicationContext::from_settings(settings).unwrap_err();
    assert!(matches!(err, ContainerError::Discovery { .. }));
}

#[test]
fn test_invalid_settings_file() {
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("container.toml");
    fs::write(&config_path, "scan_root = \"shop..services\"\n").unwrap();

    let err = ContainerSettings::load(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_logging_settings_defaults() {
    let logging = LoggingSettings::default();
    assert_eq!(logging.level, "info");
    assert!(!logging.json);
}

#[tokio::test]
async fn test_prototypes_across_tasks() -> anyhow::Result<()> {
    register_units();
    let tree = unit_tree();
    let settings = ContainerSettings::for_root(NAMESPACE).with_unit_root(tree.path());
    let context = Arc::new(ApplicationContext::from_settings(settings)?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let context = Arc::clone(&context);
            tokio::spawn(async move { context.get_bean("shoppingCart") })
        })
        .collect();

    let mut carts = Vec::new();
    for handle in handles {
        carts.push(handle.await??);
    }
    for pair in carts.windows(2) {
        assert!(!Arc::ptr_eq(&pair[0], &pair[1]));
    }
    Ok(())
}
