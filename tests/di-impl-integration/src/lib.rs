//! 组件容器实现的集中集成测试
