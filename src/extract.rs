//! 题目提取
//!
//! 深度优先遍历任意 JSON 值，把所有键名恰为 `questions` 的数组
//! 按遇到顺序拼接成一个平面序列。JSON 无环，深度由解析器自身的
//! 递归上限约束，这里直接用递归遍历

use crate::error::{AppError, AppResult};
use serde_json::Value;

/// 递归收集所有 `questions` 数组的元素
///
/// 规则：
/// - 对象按键的插入顺序遍历；键为 `questions` 时其值必须是数组，
///   元素原样追加，不再深入（即使元素内部还有 `questions` 键）
/// - 其余键递归处理对应的值
/// - 数组逐元素递归；标量与 null 不产生任何结果
///
/// 结果长度等于所有被发现数组的长度之和，不排序、不去重
pub fn collect_questions(value: &Value) -> AppResult<Vec<Value>> {
    let mut found = Vec::new();
    walk(value, &mut found)?;
    Ok(found)
}

fn walk(value: &Value, found: &mut Vec<Value>) -> AppResult<()> {
    match value {
        Value::Object(entries) => {
            for (key, child) in entries {
                if key == "questions" {
                    match child {
                        Value::Array(items) => found.extend(items.iter().cloned()),
                        other => {
                            return Err(AppError::MalformedQuestions {
                                found: value_kind(other),
                            });
                        }
                    }
                } else {
                    walk(child, found)?;
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, found)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// JSON 值的类型名，用于错误信息
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
