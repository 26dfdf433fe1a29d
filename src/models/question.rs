use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 单个题目记录
///
/// `number` 在整个题库内假定全局唯一，不做去重；后出现的同号
/// 题目会覆盖先前写出的文件。文本字段保留原始 JSON 值，由
/// LaTeX 转义层统一处理非字符串的情况
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Question {
    /// 题号，字符串或整数写法均可
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub number: Option<String>,
    /// 题干
    #[serde(default)]
    pub question: Value,
    #[serde(default)]
    pub answer_a: Value,
    #[serde(default)]
    pub answer_b: Value,
    #[serde(default)]
    pub answer_c: Value,
    #[serde(default)]
    pub answer_d: Value,
    /// 题干配图文件名，存在且非空即视为有图
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_question: Option<String>,
    /// 答案A配图文件名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_a: Option<String>,
    /// 所属章
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub chapter: Option<String>,
    /// 所属节
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub section: Option<String>,
}

impl Question {
    /// 计算分组键，章或节缺失时无法分组
    pub fn section_key(&self) -> Option<SectionKey> {
        match (&self.chapter, &self.section) {
            (Some(chapter), Some(section)) => Some(SectionKey {
                chapter: chapter.clone(),
                section: section.clone(),
            }),
            _ => None,
        }
    }

    /// 题干是否带图
    pub fn has_question_picture(&self) -> bool {
        self.picture_question.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// 答案A是否带图
    pub fn has_answer_picture(&self) -> bool {
        self.picture_a.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// 章节记录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub chapter: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub section: Option<String>,
    /// 章节标题
    #[serde(default)]
    pub section_txt: String,
}

impl Section {
    /// 计算分组键，章或节缺失时无法参与连接
    pub fn section_key(&self) -> Option<SectionKey> {
        match (&self.chapter, &self.section) {
            (Some(chapter), Some(section)) => Some(SectionKey {
                chapter: chapter.clone(),
                section: section.clone(),
            }),
            _ => None,
        }
    }
}

/// (章, 节) 复合键
///
/// 按值比较。两个字段分开保存而不是拼接成一个字符串，避免
/// 字段值本身含分隔符时的键冲突（章 "1-2" 与章 1 节 2）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionKey {
    pub chapter: String,
    pub section: String,
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}S{}", self.chapter, self.section)
    }
}

// Helper: chapter/section/number 在输入里既可能是字符串也可能是整数，
// 统一成字符串后两侧连接才一致
fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer identifier")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_accepts_string_and_integer() {
        let from_str: Question = serde_json::from_value(json!({"number": "3B101"})).unwrap();
        assert_eq!(from_str.number.as_deref(), Some("3B101"));

        let from_int: Question = serde_json::from_value(json!({"number": 42})).unwrap();
        assert_eq!(from_int.number.as_deref(), Some("42"));
    }

    #[test]
    fn test_missing_fields_default() {
        let question: Question = serde_json::from_value(json!({})).unwrap();
        assert!(question.number.is_none());
        assert!(question.question.is_null());
        assert!(question.section_key().is_none());
        assert!(!question.has_question_picture());
    }

    #[test]
    fn test_section_key_is_value_compared() {
        let question: Question =
            serde_json::from_value(json!({"chapter": 1, "section": 2})).unwrap();
        let section: Section =
            serde_json::from_value(json!({"chapter": "1", "section": "2"})).unwrap();
        assert_eq!(question.section_key(), section.section_key());
    }

    #[test]
    fn test_dashed_chapter_does_not_collide() {
        // 章 "1-2" 与 (章 1, 节 2) 必须是不同的键
        let dashed: Question =
            serde_json::from_value(json!({"chapter": "1-2", "section": "3"})).unwrap();
        let plain: Question =
            serde_json::from_value(json!({"chapter": "1", "section": "2-3"})).unwrap();
        assert_ne!(dashed.section_key(), plain.section_key());
    }

    #[test]
    fn test_picture_flags_require_non_empty_value() {
        let with_picture: Question =
            serde_json::from_value(json!({"picture_question": "3B101.svg"})).unwrap();
        assert!(with_picture.has_question_picture());
        assert!(!with_picture.has_answer_picture());

        let empty: Question =
            serde_json::from_value(json!({"picture_question": ""})).unwrap();
        assert!(!empty.has_question_picture());
    }

    #[test]
    fn test_section_key_display_matches_file_name() {
        let key = SectionKey {
            chapter: "3".to_string(),
            section: "2".to_string(),
        };
        assert_eq!(key.to_string(), "3S2");
    }
}
