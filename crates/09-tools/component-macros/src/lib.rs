//! # Component Macros
//!
//! 这个 crate 提供了组件标记和自动注册的过程宏。
//!
//! ## 核心宏
//!
//! - [`component`] - 组件标记宏，实现 `Component` 并注册到全局类型目录
//! - [`unit`] - 注册未标记的可加载单元
//! - [`component_scan`] - 声明扫描根命名空间
//!
//! 生成的代码依赖 `infrastructure_common` 和 `ctor`，使用方需要同时依赖这两个 crate。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::{component, component_scan};
//!
//! #[component_scan("my_app.beans")]
//! pub struct AppConfig;
//!
//! #[component]
//! #[derive(Default)]
//! pub struct UserService;
//!
//! #[component(name = "customBeta", prototype)]
//! #[derive(Default)]
//! pub struct Beta;
//! ```

use proc_macro::TokenStream;

mod component;
mod scan;
mod utils;

/// 组件标记宏
///
/// 为结构体实现 `Constructible` 和 `Component`，并在程序启动时把类型
/// 注册到全局类型目录，命名空间取自所在模块路径。
///
/// # 参数
///
/// - `name = "customName"` - 自定义组件名称，缺省为首字母小写的类型名
/// - `singleton` - 单例作用域（默认）
/// - `prototype` - 原型作用域
/// - `scope = "tag"` - 任意作用域标签，非 `"singleton"` 均按原型处理
/// - `constructor = path` - 无参构造函数，返回 `Result<Self, E>`；缺省使用 `Default`
///
/// # 示例
///
/// ```rust,ignore
/// #[component(constructor = Self::open)]
/// pub struct ConnectionPool {
///     // 字段
/// }
/// ```
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    component::component_impl(args, input)
}

/// 可加载单元宏
///
/// 只注册类型，不带组件标记，扫描时会被跳过。
#[proc_macro_attribute]
pub fn unit(args: TokenStream, input: TokenStream) -> TokenStream {
    component::unit_impl(args, input)
}

/// 扫描配置宏
///
/// # 示例
///
/// ```rust,ignore
/// #[component_scan("my_app.beans")]
/// pub struct AppConfig;
/// ```
#[proc_macro_attribute]
pub fn component_scan(args: TokenStream, input: TokenStream) -> TokenStream {
    scan::component_scan_impl(args, input)
}
