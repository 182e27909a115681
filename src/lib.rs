//! CourseHub - 评测平台课程管理核心
//!
//! 评测平台中课程可见性、报名、进度聚合与附件配额子系统，
//! 以库的形式提供。HTTP 路由、鉴权、持久化引擎由宿主平台负责，
//! 本 crate 通过窄接口（`storage` 模块中的 trait）消费它们。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `services`: 业务逻辑层（可见性 / 报名 / 进度 / 附件 / 排行榜）
//! - `storage`: 数据存储接口与内存参考实现
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
