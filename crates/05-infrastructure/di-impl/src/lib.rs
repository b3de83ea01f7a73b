//! # 组件容器具体实现
//!
//! 提供命名空间扫描器、组件注册表、单例池和应用上下文。
//!
//! ## 启动流程
//!
//! 1. [`NamespaceScanner`] 扫描根命名空间，得到组件描述符
//! 2. [`BeanDefinitionMap`] 按名称装配注册表
//! 3. [`SingletonPool`] 预先创建所有单例
//! 4. [`ApplicationContext`] 对外提供按名称查找
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use di_abstractions::BeanContainer;
//! use di_impl::ApplicationContext;
//!
//! let context = ApplicationContext::new::<AppConfig>()?;
//! let service = context.get_bean("userService")?;
//! ```

pub mod context;
pub mod factory;
pub mod logging;
pub mod pool;
pub mod registry;
pub mod scanner;

pub use context::ApplicationContext;
pub use factory::DefaultBeanFactory;
pub use logging::init_logging;
pub use pool::SingletonPool;
pub use registry::{Assembly, BeanDefinitionMap};
pub use scanner::NamespaceScanner;
