//! Ecole - 多租户学校管理后端服务
//!
//! 基于 Actix Web 构建，按学校（租户）隔离学生、教师、员工、教室、课表、缴费与成绩。
//!
//! # 架构
//! - `cache`: 会话用户缓存（Moka）
//! - `client`: 无界面的客户端侧实体管理（表单、对话框状态机、提示、批量创建）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证与权限门控中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod client;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
