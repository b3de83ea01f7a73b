//! # Infrastructure Common
//!
//! 这个 crate 提供了组件容器的公共类型和发现源。
//!
//! ## 核心组件
//!
//! - [`ComponentDescriptor`] - 组件描述符（类型、名称、作用域）
//! - [`Constructible`] / [`Component`] - 无参构造能力与组件标记
//! - [`Scope`] - 组件作用域
//! - [`TypeCatalog`] / [`DirectoryUnitSource`] - 单元发现源
//! - [`ContainerSettings`] / [`ScanConfiguration`] - 容器配置
//!
//! ## 设计原则
//!
//! - 组件标记在编译期确定
//! - 单个单元的失败不影响整体发现
//! - 结构性错误显式返回给调用方

pub mod component;
pub mod configuration;
pub mod conventions;
pub mod discovery;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use component::*;
pub use configuration::*;
pub use conventions::*;
pub use discovery::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
