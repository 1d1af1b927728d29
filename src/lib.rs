//! Institute Portal - 学院管理平台后端服务
//!
//! 基于 Actix Web 的学生、教师、课程管理后端，核心是 CSV 批量导入与报表汇总。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 应用上下文与生命周期
//! - `services`: 业务逻辑层（导入流水线、报表聚合）
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
