//! # Question Tex Export
//!
//! 把嵌套 JSON 题库转换为 LaTeX 片段与章节文件的小工具集
//!
//! ## 架构设计
//!
//! 每个转换都是线性的"读取 → 变换 → 写出"流程，单线程同步执行：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、章节与 (章, 节) 复合键
//!
//! ### ② 核心算法层
//! - `extract` - 递归收集任意深度的 `questions` 数组
//! - `group` - 题目与章节按复合键连接
//! - `latex` - 有序转义链与 LaTeX 模板渲染
//! - `svg` - SVG 根标签的宽高检查，纯模式匹配
//!
//! ### ③ 输出层（Export）
//! - `export` - 文件写出；作业级失败终止该作业，条目级失败
//!   记录后跳过
//!
//! ### ④ 编排层（App）
//! - `app` - 顺序运行片段作业与章节作业列表，汇总统计
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod group;
pub mod latex;
pub mod logger;
pub mod models;
pub mod svg;

// 重新导出常用类型
pub use app::App;
pub use config::{Config, SectionJob};
pub use error::{AppError, AppResult};
pub use export::ExportStats;
pub use group::SectionUnit;
pub use models::{Question, Section, SectionKey};
pub use svg::{inspect_svg, SizeSource, SvgInfo};
