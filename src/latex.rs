//! LaTeX 片段生成
//!
//! 转义表是有序的字面替换链：后面的替换作用在已部分转义的
//! 字符串上，顺序不可调整。反斜杠有意不转义，`"`→`""` 也按
//! 原样保留，下游模板依赖这两个行为

use crate::group::SectionUnit;
use crate::models::Question;
use serde_json::Value;

/// 有序替换表，表内顺序即应用顺序
const REPLACEMENTS: &[(&str, &str)] = &[
    ("&", "\\&"),
    ("%", "\\%"),
    ("#", "\\#"),
    ("_", "\\_"),
    ("{", "\\{"),
    ("}", "\\}"),
    ("~", "\\textasciitilde{}"),
    ("^", "\\textasciicircum{}"),
    ("\"", "\"\""),
];

/// 转义 LaTeX 特殊字符
///
/// 仅处理字符串值；其他类型（数字、null、缺失字段）一律返回
/// 空串，从不报错、从不原样透传
pub fn escape(value: &Value) -> String {
    let Some(text) = value.as_str() else {
        return String::new();
    };
    let mut escaped = text.to_string();
    for (needle, replacement) in REPLACEMENTS {
        escaped = escaped.replace(needle, replacement);
    }
    escaped
}

/// 布尔字段在模板中的字面写法
fn bool_literal(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

/// 渲染单个题目片段
///
/// 固定宏调用模板：题号原样写入，题干与四个答案转义，两个
/// 配图标志写成字面 true/false
pub fn render_fragment(number: &str, question: &Question) -> String {
    format!(
        "\\examquestion{{{number}}}%\n\
         {{{stem}}}%\n\
         {{{answer_a}}}%\n\
         {{{answer_b}}}%\n\
         {{{answer_c}}}%\n\
         {{{answer_d}}}%\n\
         {{{picture_question}}}{{{picture_a}}}\n",
        number = number,
        stem = escape(&question.question),
        answer_a = escape(&question.answer_a),
        answer_b = escape(&question.answer_b),
        answer_c = escape(&question.answer_c),
        answer_d = escape(&question.answer_d),
        picture_question = bool_literal(question.has_question_picture()),
        picture_a = bool_literal(question.has_answer_picture()),
    )
}

/// 渲染章节文件
///
/// 一行注释头（章/节/标题），随后是 description 环境，每道
/// 匹配到的题目一行 \input，顺序即分组时的扫描顺序
pub fn render_section(unit: &SectionUnit, fragment_dir: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "% chapter {} section {}: {}\n",
        unit.key.chapter, unit.key.section, unit.section_txt
    ));
    out.push_str("\\begin{description}\n");
    for question in &unit.questions {
        if let Some(number) = &question.number {
            out.push_str(&format!("    \\input{{{}/{}.tex}}\n", fragment_dir, number));
        }
    }
    out.push_str("\\end{description}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionKey;
    use serde_json::json;

    #[test]
    fn test_escape_each_replacement() {
        assert_eq!(escape(&json!("a&b")), "a\\&b");
        assert_eq!(escape(&json!("100%")), "100\\%");
        assert_eq!(escape(&json!("#1")), "\\#1");
        assert_eq!(escape(&json!("f_c")), "f\\_c");
        assert_eq!(escape(&json!("{x}")), "\\{x\\}");
        assert_eq!(escape(&json!("~")), "\\textasciitilde{}");
        assert_eq!(escape(&json!("^")), "\\textasciicircum{}");
        assert_eq!(escape(&json!("a\"b")), "a\"\"b");
    }

    #[test]
    fn test_escape_brace_substitutions_come_first() {
        // ~ 与 ^ 的替换结果里含有花括号，因为花括号替换排在前面，
        // 这些花括号保持原样
        assert_eq!(escape(&json!("{~}")), "\\{\\textasciitilde{}\\}");
    }

    #[test]
    fn test_escape_backslash_passes_through() {
        assert_eq!(escape(&json!("a\\b")), "a\\b");
    }

    #[test]
    fn test_escape_double_application_changes_output() {
        let once = escape(&json!("a&b"));
        let twice = escape(&json!(once));
        assert_ne!(once, twice);
    }

    #[test]
    fn test_escape_non_string_returns_empty() {
        assert_eq!(escape(&json!(42)), "");
        assert_eq!(escape(&json!(1.5)), "");
        assert_eq!(escape(&Value::Null), "");
        assert_eq!(escape(&json!(true)), "");
        assert_eq!(escape(&json!(["a"])), "");
        assert_eq!(escape(&json!({"a": 1})), "");
    }

    #[test]
    fn test_render_fragment_escapes_fields_and_flags() {
        let question: Question = serde_json::from_value(json!({
            "number": "3B101",
            "question": "占空比为 50% 的方波?",
            "answer_a": "A & B",
            "answer_b": "b",
            "answer_c": "c",
            "answer_d": "d",
            "picture_question": "3B101.svg"
        }))
        .unwrap();

        let tex = render_fragment("3B101", &question);

        assert!(tex.starts_with("\\examquestion{3B101}%\n"));
        assert!(tex.contains("{占空比为 50\\% 的方波?}%\n"));
        assert!(tex.contains("{A \\& B}%\n"));
        assert!(tex.ends_with("{true}{false}\n"));
    }

    #[test]
    fn test_render_fragment_missing_fields_become_empty() {
        let question: Question = serde_json::from_value(json!({"number": "X1"})).unwrap();

        let tex = render_fragment("X1", &question);

        assert!(tex.contains("{}%\n"));
        assert!(tex.ends_with("{false}{false}\n"));
    }

    #[test]
    fn test_render_section_layout_and_order() {
        let questions: Vec<Question> = vec![
            serde_json::from_value(json!({"number": "A1"})).unwrap(),
            serde_json::from_value(json!({"number": "B2"})).unwrap(),
        ];
        let unit = SectionUnit {
            key: SectionKey {
                chapter: "3".to_string(),
                section: "2".to_string(),
            },
            section_txt: "Antennas".to_string(),
            questions,
        };

        let tex = render_section(&unit, "fragments");

        assert!(tex.starts_with("% chapter 3 section 2: Antennas\n\\begin{description}\n"));
        assert!(tex.ends_with("\\end{description}\n"));
        let a1 = tex.find("\\input{fragments/A1.tex}").unwrap();
        let b2 = tex.find("\\input{fragments/B2.tex}").unwrap();
        assert!(a1 < b2);
    }

    #[test]
    fn test_render_section_skips_numberless_question() {
        let questions: Vec<Question> = vec![
            serde_json::from_value(json!({"question": "no number"})).unwrap(),
            serde_json::from_value(json!({"number": "A1"})).unwrap(),
        ];
        let unit = SectionUnit {
            key: SectionKey {
                chapter: "1".to_string(),
                section: "1".to_string(),
            },
            section_txt: "X".to_string(),
            questions,
        };

        let tex = render_section(&unit, "fragments");

        assert_eq!(tex.matches("\\input{").count(), 1);
    }
}
