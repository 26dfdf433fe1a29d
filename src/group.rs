//! 章节分组
//!
//! 题目与章节按 (章, 节) 复合键连接。纯函数，同样的输入序列
//! 总是产生同样的输出序列

use crate::models::{Question, Section, SectionKey};
use std::collections::HashMap;
use tracing::{debug, warn};

/// 一个输出单元：章节元数据加上按原始扫描顺序匹配到的题目
#[derive(Debug, Clone)]
pub struct SectionUnit {
    pub key: SectionKey,
    pub section_txt: String,
    pub questions: Vec<Question>,
}

/// 按复合键把题目归入章节
///
/// - 单次遍历题目序列建立键到题目列表的映射，键内顺序即扫描顺序
/// - 按章节序列原始顺序输出；没有匹配题目的章节整体跳过，
///   不算错误
/// - 题目不按题号排序
pub fn group_questions(questions: &[Question], sections: &[Section]) -> Vec<SectionUnit> {
    let mut by_key: HashMap<SectionKey, Vec<Question>> = HashMap::new();
    for question in questions {
        match question.section_key() {
            Some(key) => by_key.entry(key).or_default().push(question.clone()),
            None => warn!("⚠️ 题目 {:?} 缺少章节信息，无法分组", question.number),
        }
    }

    let mut units = Vec::new();
    for section in sections {
        let Some(key) = section.section_key() else {
            warn!("⚠️ 章节记录缺少章或节字段，跳过: {}", section.section_txt);
            continue;
        };
        match by_key.get(&key) {
            Some(matched) if !matched.is_empty() => units.push(SectionUnit {
                key,
                section_txt: section.section_txt.clone(),
                questions: matched.clone(),
            }),
            _ => debug!("章节 {} 没有匹配的题目，跳过", key),
        }
    }
    units
}
