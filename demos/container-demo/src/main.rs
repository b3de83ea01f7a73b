//! # 容器演示程序
//!
//! 演示扫描配置、单例与原型作用域以及按名称查找组件

mod beans;

use anyhow::Context;
use beans::{GreetingService, RequestContext, StartupClock};
use clap::Parser;
use component_macros::component_scan;
use di_abstractions::{BeanContainer, BeanContainerExt};
use di_impl::{init_logging, ApplicationContext};
use infrastructure_common::ContainerSettings;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 缺省扫描配置
#[component_scan("container_demo.beans")]
pub struct AppConfig;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "container-demo")]
#[command(about = "Lorn Beans 容器演示")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "config/container.toml")]
    config: String,

    /// 覆盖扫描根命名空间
    #[arg(long)]
    scan_root: Option<String>,

    /// 覆盖日志级别
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args)?;

    if let Err(e) = init_logging(&settings.logging) {
        eprintln!("日志初始化失败: {e}");
    }
    info!("启动容器演示，扫描根: {}", settings.scan_root);

    let context = ApplicationContext::from_settings(settings).context("容器构建失败")?;
    for name in context.bean_names() {
        info!(
            "已注册组件: {} (单例: {})",
            name,
            context.is_singleton(&name)?
        );
    }
    for skipped in context.skipped_units() {
        warn!("跳过单元: {}", skipped);
    }

    demonstrate_singleton(&context)?;
    demonstrate_prototype(&context)?;
    demonstrate_missing(&context);

    info!("演示结束");
    Ok(())
}

/// 读取配置文件，不存在时使用缺省扫描配置
fn load_settings(args: &Args) -> anyhow::Result<ContainerSettings> {
    let mut settings = if Path::new(&args.config).exists() {
        ContainerSettings::load(&args.config)
            .with_context(|| format!("无法加载配置文件 {}", args.config))?
    } else {
        ContainerSettings::from_configuration::<AppConfig>()
    };

    if let Some(scan_root) = &args.scan_root {
        settings.scan_root = scan_root.clone();
    }
    if let Some(level) = &args.log_level {
        settings.logging.level = level.clone();
    }
    settings.validate()?;
    Ok(settings)
}

fn demonstrate_singleton(context: &ApplicationContext) -> anyhow::Result<()> {
    let greeter = context.get_bean_as::<GreetingService>("greetingService")?;
    info!("{}", greeter.greet("Lorn"));

    let again = context.get_bean_as::<GreetingService>("greetingService")?;
    info!("单例是否为同一实例: {}", Arc::ptr_eq(&greeter, &again));

    let clock = context.get_bean_as::<StartupClock>("startupClock")?;
    info!("容器启动时间戳: {}", clock.started_at());
    Ok(())
}

fn demonstrate_prototype(context: &ApplicationContext) -> anyhow::Result<()> {
    let first = context.get_bean_as::<RequestContext>("requestContext")?;
    let second = context.get_bean_as::<RequestContext>("requestContext")?;
    first.record();
    first.record();

    info!(
        "原型实例互相独立: first={}, second={}",
        first.record(),
        second.record()
    );
    Ok(())
}

fn demonstrate_missing(context: &ApplicationContext) {
    match context.get_bean("textHelper") {
        Ok(_) => warn!("未标记的类型不应被注册"),
        Err(e) => info!("查找未注册组件: {}", e),
    }
}
