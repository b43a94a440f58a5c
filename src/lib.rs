//! # Quiz Taker
//!
//! 一个客户端答题视图的 Rust 实现：按ID获取测验、记录用户选择、提交后判分
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 模型层（Models）
//! - `models/` - 测验与题目的数据结构
//! - `label_for_position` - 选项标签的唯一计算函数（存储、判分、展示共用）
//!
//! ### ② 客户端层（Clients）
//! - `clients/` - 封装测验 API 的 HTTP 调用
//! - `QuizClient` - 单次 GET 获取测验文档，不重试、不缓存
//!
//! ### ③ 加载层（Loader）
//! - `loader` - 取回测验并做过期响应防护
//! - `LoadTracker` - 代数追踪，保证只有最新一次加载的结果会被应用
//!
//! ### ④ 会话层（Session）
//! - `session` - 答题状态机（Open → Graded，单向且只迁移一次）
//! - `QuizSession` - 选择记录与一次性幂等判分
//!
//! ### ⑤ 应用层（App）
//! - `app` - 终端交互循环，串联加载与会话
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod loader;
pub mod logger;
pub mod models;
pub mod session;

// 重新导出常用类型
pub use app::App;
pub use clients::QuizClient;
pub use config::Config;
pub use error::{AppError, AppResult, SessionError};
pub use loader::{LoadTicket, LoadTracker, QuizLoader};
pub use models::{label_for_position, Question, Quiz};
pub use session::{ChoiceMark, GradeReport, QuestionResult, QuizSession, SessionState};
