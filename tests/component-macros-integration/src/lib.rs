//! 组件宏与应用上下文的端到端测试
//!
//! 组件类型定义在各测试文件中，由测试二进制自身完成注册。
