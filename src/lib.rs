//! Novel Splitter - 小说分章服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Chapter Context: 章节实体、分章模式与参数
//! - 章节分割器: 按标记/字数切分并规整章节大小（纯文本变换）
//!
//! 应用层 (application/):
//! - Ports: ManuscriptParser
//! - Commands: 文本分章、稿件分章
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: TXT 稿件解析

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::{split_novel, Chapter, SplitMode, SplitOptions};
