//! # Bean Container Abstractions
//!
//! 组件容器抽象层，定义组件扫描、注册和实例化的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentScanner`] - 组件扫描器接口
//! - [`BeanDefinitionRegistry`] - 组件定义注册表接口
//! - [`BeanFactory`] - 组件工厂接口
//! - [`BeanContainer`] - 组件容器查找接口

pub mod container;
pub mod factory;
pub mod registry;
pub mod scanner;

pub use container::*;
pub use factory::*;
pub use registry::*;
pub use scanner::*;
