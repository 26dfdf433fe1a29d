//! 数据模型

pub mod question;

pub use question::{Question, Section, SectionKey};
