//! 日志初始化

use infrastructure_common::LoggingSettings;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 按配置安装全局 tracing 订阅者
///
/// 已经安装过订阅者时返回错误，调用方可以忽略。
pub fn init_logging(
    settings: &LoggingSettings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&settings.level))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(settings.show_target)
        .with_thread_ids(settings.show_thread_ids);

    if settings.json {
        subscriber.json().try_init()?;
    } else {
        subscriber.try_init()?;
    }

    info!("日志系统初始化完成");
    Ok(())
}
