//! 缺省组件工厂

use di_abstractions::BeanFactory;
use infrastructure_common::{BeanInstance, ComponentDescriptor, ConstructionError};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// 缺省组件工厂
///
/// 调用描述符上的无参构造器。构造器返回错误或发生 panic 都会转换为
/// [`ConstructionError`]。
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBeanFactory;

impl DefaultBeanFactory {
    /// 创建新的工厂
    pub fn new() -> Self {
        Self
    }
}

impl BeanFactory for DefaultBeanFactory {
    fn create_bean(
        &self,
        descriptor: &ComponentDescriptor,
    ) -> Result<BeanInstance, ConstructionError> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| descriptor.instantiate()))
            .unwrap_or_else(|payload| {
                Err(ConstructionError::new(
                    &descriptor.name,
                    format!("构造器 panic: {}", panic_message(payload.as_ref())),
                ))
            });

        if let Err(e) = &result {
            error!(
                "创建组件 {} ({}) 失败: {}",
                descriptor.name, descriptor.type_info.type_path, e.message
            );
        }
        result
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<unknown>"
    }
}
