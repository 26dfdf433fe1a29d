//! 文件输出
//!
//! 片段导出与章节导出两类作业。读取/解析/结构失败对整个作业
//! 致命，在写任何输出之前返回；单个文件写入失败记录后跳过，
//! 继续处理剩余条目。重复题号静默覆盖先前的文件，重复运行
//! 覆盖同名输出，结果幂等

use crate::config::SectionJob;
use crate::error::{AppError, AppResult};
use crate::extract;
use crate::group::{self, SectionUnit};
use crate::latex;
use crate::models::{Question, Section};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

/// 导出统计
#[derive(Debug, Default)]
pub struct ExportStats {
    pub written: usize,
    pub skipped: usize,
}

/// 片段导出作业：提取所有题目并逐题写出 `<number>.tex`
pub fn export_fragments(input_path: &str, output_dir: &str) -> AppResult<ExportStats> {
    info!("📁 读取题库: {}", input_path);
    let value = read_json(input_path)?;
    let raw_questions = extract::collect_questions(&value)?;
    info!("✓ 提取到 {} 道题目", raw_questions.len());

    fs::create_dir_all(output_dir).map_err(|source| AppError::OutputDir {
        path: output_dir.to_string(),
        source,
    })?;

    let mut stats = ExportStats::default();
    for (index, raw) in raw_questions.iter().enumerate() {
        match write_fragment(output_dir, raw) {
            Ok(number) => {
                debug!("✓ 已写出 {}.tex", number);
                stats.written += 1;
            }
            Err(e) => {
                error!("❌ 第 {} 道题目写入失败: {}", index + 1, e);
                stats.skipped += 1;
            }
        }
    }

    info!(
        "✅ 片段导出完成: 写出 {}, 跳过 {}",
        stats.written, stats.skipped
    );
    Ok(stats)
}

/// 章节导出作业：按复合键分组后逐章节写出 `<chapter>S<section>.tex`
pub fn run_section_job(job: &SectionJob) -> AppResult<ExportStats> {
    info!("📁 读取章节输入: {}", job.input_json);
    let value = read_json(&job.input_json)?;

    let sections: Vec<Section> = parse_field(&value, &job.input_json, "sections")?;
    let questions: Vec<Question> = parse_field(&value, &job.input_json, "questions")?;
    info!("✓ 载入 {} 个章节 / {} 道题目", sections.len(), questions.len());

    let units = group::group_questions(&questions, &sections);
    info!("✓ {} 个章节匹配到题目", units.len());

    fs::create_dir_all(&job.output_dir).map_err(|source| AppError::OutputDir {
        path: job.output_dir.clone(),
        source,
    })?;

    let mut stats = ExportStats::default();
    for unit in &units {
        match write_section(&job.output_dir, &job.fragment_dir, unit) {
            Ok(file_name) => {
                debug!("✓ 已写出 {}", file_name);
                stats.written += 1;
            }
            Err(e) => {
                error!("❌ 章节 {} 写入失败: {}", unit.key, e);
                stats.skipped += 1;
            }
        }
    }

    info!(
        "✅ 章节导出完成: 写出 {}, 跳过 {}",
        stats.written, stats.skipped
    );
    Ok(stats)
}

/// 读取并解析主输入文件
fn read_json(path: &str) -> AppResult<Value> {
    let text = fs::read_to_string(path).map_err(|source| AppError::InputRead {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AppError::JsonParse {
        path: path.to_string(),
        source,
    })
}

/// 取出并解析一个顶层数组字段
fn parse_field<T: serde::de::DeserializeOwned>(
    value: &Value,
    path: &str,
    field: &'static str,
) -> AppResult<Vec<T>> {
    let field_value = value.get(field).ok_or_else(|| AppError::Schema {
        path: path.to_string(),
        field,
    })?;
    serde_json::from_value(field_value.clone()).map_err(|_| AppError::Schema {
        path: path.to_string(),
        field,
    })
}

/// 写出单个题目片段，返回题号
fn write_fragment(output_dir: &str, raw: &Value) -> AppResult<String> {
    let question: Question =
        serde_json::from_value(raw.clone()).map_err(|source| AppError::ItemParse { source })?;
    let number = question.number.clone().ok_or(AppError::MissingNumber)?;

    let path = Path::new(output_dir).join(format!("{}.tex", number));
    let content = latex::render_fragment(&number, &question);
    fs::write(&path, content).map_err(|source| AppError::ItemWrite {
        path: path.display().to_string(),
        source,
    })?;
    Ok(number)
}

/// 写出单个章节文件，返回文件名
fn write_section(output_dir: &str, fragment_dir: &str, unit: &SectionUnit) -> AppResult<String> {
    let file_name = format!("{}.tex", unit.key);
    let path = Path::new(output_dir).join(&file_name);
    let content = latex::render_section(unit, fragment_dir);
    fs::write(&path, content).map_err(|source| AppError::ItemWrite {
        path: path.display().to_string(),
        source,
    })?;
    Ok(file_name)
}
