use component_macros::{component, component_scan, unit};
use di_abstractions::{BeanContainer, BeanContainerExt};
use di_impl::ApplicationContext;
use infrastructure_common::{namespace_from_module_path, ContainerSettings, ScanConfiguration};

#[component_scan("component_ok")]
pub struct AppConfig;

#[component]
#[derive(Debug, Default)]
pub struct Greeter {
    greeting: String,
}

#[component(name = "counter", prototype)]
#[derive(Debug, Default)]
pub struct Counter {
    value: u32,
}

#[component(constructor = Self::connect)]
#[derive(Debug)]
pub struct Connection {
    url: String,
}

impl Connection {
    fn connect() -> Result<Self, std::io::Error> {
        Ok(Self {
            url: "memory://".to_string(),
        })
    }
}

#[unit]
pub struct Helper;

fn main() {
    assert_eq!(AppConfig::SCAN_ROOT, "component_ok");

    let root = namespace_from_module_path(module_path!());
    let context = ApplicationContext::from_settings(ContainerSettings::for_root(root)).unwrap();
    let greeter = context.get_bean_as::<Greeter>("greeter").unwrap();
    let counter = context.get_bean_as::<Counter>("counter").unwrap();
    let connection = context.get_bean_as::<Connection>("connection").unwrap();

    assert!(greeter.greeting.is_empty());
    assert_eq!(counter.value, 0);
    assert_eq!(connection.url, "memory://");
    assert!(!context.contains_bean("helper"));
}
