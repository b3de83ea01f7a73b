//! 组件扫描器抽象接口
//!
//! 提供按命名空间发现组件的能力

use infrastructure_common::{ComponentDescriptor, DiscoveryError, LoadError};

/// 一次扫描的结果
///
/// 每个候选单元对应一项：成功得到描述符，或者该单元的加载错误。
/// 未带组件标记的单元不出现在结果中。
pub type ScanOutcome = Vec<Result<ComponentDescriptor, LoadError>>;

/// 组件扫描器 trait
pub trait ComponentScanner: Send + Sync {
    /// 扫描根命名空间下的直接单元
    ///
    /// 根命名空间无法解析为可浏览位置时返回 [`DiscoveryError`]。
    fn scan(&self, root_namespace: &str) -> Result<ScanOutcome, DiscoveryError>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}
