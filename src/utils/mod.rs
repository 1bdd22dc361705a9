//! # 常用工具模块
//!
//! 目前只有单元测试、集成测试共用的断言宏
