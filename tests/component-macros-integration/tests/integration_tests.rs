//! 组件宏端到端集成测试

use component_macros::component_scan;
use di_abstractions::{BeanContainer, BeanContainerExt};
use di_impl::ApplicationContext;
use infrastructure_common::{
    ContainerError, ContainerSettings, DuplicateNamePolicy, ScanConfiguration,
    SingletonFailurePolicy,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static ALPHA_CREATED: AtomicUsize = AtomicUsize::new(0);

mod scenario {
    use super::ALPHA_CREATED;
    use component_macros::{component, unit};
    use std::sync::atomic::Ordering;

    /// 单例，默认名称 `alpha`
    #[component]
    #[derive(Debug)]
    pub struct Alpha {
        pub created: usize,
    }

    impl Default for Alpha {
        fn default() -> Self {
            Self {
                created: ALPHA_CREATED.fetch_add(1, Ordering::SeqCst) + 1,
            }
        }
    }

    /// 原型，自定义名称
    #[component(name = "customBeta", scope = "prototype")]
    #[derive(Debug, Default)]
    pub struct Beta {
        pub calls: Vec<String>,
    }

    /// 未标记的类型
    #[unit]
    #[derive(Debug)]
    pub struct Gamma;

    pub mod nested {
        use component_macros::component;

        /// 子命名空间中的组件不会被扫描到
        #[component]
        #[derive(Debug, Default)]
        pub struct Deep;
    }
}

mod faulty {
    pub mod broken {
        use component_macros::component;

        #[component(constructor = Self::connect)]
        #[derive(Debug)]
        pub struct BrokenClient;

        impl BrokenClient {
            fn connect() -> Result<Self, String> {
                Err("连接被拒绝".to_string())
            }
        }
    }

    pub mod clash {
        use component_macros::component;

        #[component(name = "clash")]
        #[derive(Debug, Default)]
        pub struct FirstClash;

        #[component(name = "clash")]
        #[derive(Debug, Default)]
        pub struct SecondClash;
    }
}

#[component_scan("integration_tests.scenario")]
pub struct AppConfig;

#[test]
fn test_scan_root_from_configuration() {
    assert_eq!(AppConfig::SCAN_ROOT, "integration_tests.scenario");
}

#[test]
fn test_scenario() {
    let context = ApplicationContext::new::<AppConfig>().unwrap();

    assert_eq!(context.bean_names(), vec!["alpha", "customBeta"]);
    assert_eq!(context.singleton_count(), 1);

    let first = context.get_bean("alpha").unwrap();
    let second = context.get_bean("alpha").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let beta1 = context.get_bean_as::<scenario::Beta>("customBeta").unwrap();
    let beta2 = context.get_bean_as::<scenario::Beta>("customBeta").unwrap();
    assert!(!Arc::ptr_eq(&beta1, &beta2));

    assert!(matches!(
        context.get_bean("gamma"),
        Err(ContainerError::NotFound { .. })
    ));
    assert!(!context.contains_bean("deep"));
}

#[test]
fn test_singleton_built_once_per_context() {
    let context = ApplicationContext::new::<AppConfig>().unwrap();
    let alpha = context.get_bean_as::<scenario::Alpha>("alpha").unwrap();

    for _ in 0..10 {
        let again = context.get_bean_as::<scenario::Alpha>("alpha").unwrap();
        assert_eq!(again.created, alpha.created);
    }
    assert!(ALPHA_CREATED.load(Ordering::SeqCst) >= 1);
}

#[test]
fn test_nested_namespace_is_scanned_separately() {
    let context = ApplicationContext::from_settings(ContainerSettings::for_root(
        "integration_tests.scenario.nested",
    ))
    .unwrap();
    assert_eq!(context.bean_names(), vec!["deep"]);
}

#[test]
fn test_construction_failure_is_deferred() {
    let context = ApplicationContext::from_settings(ContainerSettings::for_root(
        "integration_tests.faulty.broken",
    ))
    .unwrap();

    assert!(context.contains_bean("brokenClient"));
    assert_eq!(context.singleton_count(), 0);
    let err = context.get_bean("brokenClient").unwrap_err();
    assert!(matches!(err, ContainerError::Construction(ref e) if e.message == "连接被拒绝"));
}

#[test]
fn test_construction_failure_aborts() {
    let settings = ContainerSettings::for_root("integration_tests.faulty.broken")
        .with_singleton_failures(SingletonFailurePolicy::Abort);
    assert!(matches!(
        ApplicationContext::from_settings(settings),
        Err(ContainerError::Construction(_))
    ));
}

#[test]
fn test_duplicate_names() {
    let err = ApplicationContext::from_settings(ContainerSettings::for_root(
        "integration_tests.faulty.clash",
    ))
    .unwrap_err();
    assert!(matches!(err, ContainerError::DuplicateName { ref name, .. } if name == "clash"));

    let settings = ContainerSettings::for_root("integration_tests.faulty.clash")
        .with_duplicate_names(DuplicateNamePolicy::LastWins);
    let context = ApplicationContext::from_settings(settings).unwrap();
    assert_eq!(context.bean_names(), vec!["clash"]);
}

#[tokio::test]
async fn test_shared_context_across_tasks() {
    let context = Arc::new(ApplicationContext::new::<AppConfig>().unwrap());
    let expected = context.get_bean("alpha").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let context = Arc::clone(&context);
            tokio::spawn(async move { context.get_bean("alpha").unwrap() })
        })
        .collect();

    for handle in handles {
        assert!(Arc::ptr_eq(&handle.await.unwrap(), &expected));
    }
}
