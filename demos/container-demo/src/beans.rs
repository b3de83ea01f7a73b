//! 演示组件

use component_macros::{component, unit};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// 问候服务，单例
#[component]
#[derive(Debug)]
pub struct GreetingService {
    greeting: String,
}

impl Default for GreetingService {
    fn default() -> Self {
        Self {
            greeting: "你好".to_string(),
        }
    }
}

impl GreetingService {
    /// 生成问候语
    pub fn greet(&self, name: &str) -> String {
        format!("{}, {}!", self.greeting, name)
    }
}

/// 请求上下文，每次查找都新建
#[component(name = "requestContext", prototype)]
#[derive(Debug, Default)]
pub struct RequestContext {
    handled: AtomicU64,
}

impl RequestContext {
    /// 记录一次处理，返回累计次数
    pub fn record(&self) -> u64 {
        self.handled.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// 启动时刻，由自定义构造函数创建
#[component(constructor = Self::now)]
#[derive(Debug)]
pub struct StartupClock {
    started_at: u64,
}

impl StartupClock {
    fn now() -> Result<Self, std::time::SystemTimeError> {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
        Ok(Self {
            started_at: elapsed.as_secs(),
        })
    }

    /// 启动时间戳（秒）
    pub fn started_at(&self) -> u64 {
        self.started_at
    }
}

/// 未标记为组件的辅助类型，扫描时被跳过
#[unit]
#[derive(Debug)]
pub struct TextHelper;
