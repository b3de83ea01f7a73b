//! 命名约定
//!
//! 命名空间使用点分形式 (`a.b.c`)，与 Rust 模块路径 (`a::b::c`) 和目录
//! 路径 (`a/b/c`) 之间按以下函数互相转换。

use std::path::PathBuf;

/// 缺省的单元文件后缀
pub const DEFAULT_UNIT_SUFFIX: &str = ".unit";

/// 命名空间分隔符
pub const NAMESPACE_SEPARATOR: char = '.';

/// 将首字母转为小写，用于由类型简单名推导组件名称
///
/// `UserService` -> `userService`，空字符串保持不变。
pub fn uncapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 将模块路径转换为命名空间
pub fn namespace_from_module_path(module_path: &str) -> String {
    module_path.replace("::", ".")
}

/// 命名空间是否有效：非空且每一段都非空
pub fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace
            .split(NAMESPACE_SEPARATOR)
            .all(|segment| !segment.trim().is_empty())
}

/// 将命名空间转换为相对目录路径
pub fn namespace_to_path(namespace: &str) -> PathBuf {
    namespace.split(NAMESPACE_SEPARATOR).collect()
}

/// 由命名空间和单元基础名拼出完整名称
pub fn qualify(namespace: &str, base_name: &str) -> String {
    if namespace.is_empty() {
        base_name.to_string()
    } else {
        format!("{namespace}{NAMESPACE_SEPARATOR}{base_name}")
    }
}

/// 拆分完整名称为 (命名空间, 基础名)
pub fn split_qualified(qualified_name: &str) -> (&str, &str) {
    qualified_name
        .rsplit_once(NAMESPACE_SEPARATOR)
        .unwrap_or(("", qualified_name))
}
