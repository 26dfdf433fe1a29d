//! SVG 尺寸检查工具
//!
//! 用法：svg_info [文件...]
//! 不带参数时运行三个内置示例；每个文件独立处理，单个文件
//! 失败不影响其余文件

use question_tex_export::logger;
use question_tex_export::svg::{self, SvgInfo};
use std::fs;
use tracing::{error, info};

/// 内置示例，覆盖属性、viewBox 推导与缺失根标签三种情况
const BUILTIN_SAMPLES: &[(&str, &str)] = &[
    (
        "attributes",
        r#"<svg width="400px" height="300px" viewBox="0 0 400 300"></svg>"#,
    ),
    ("viewBox", r#"<svg viewBox="0 0 100 50"></svg>"#),
    ("missing root", r#"<div>not an svg document</div>"#),
];

fn main() {
    logger::init();

    let paths: Vec<String> = std::env::args().skip(1).collect();

    if paths.is_empty() {
        info!("未提供文件参数，运行内置示例");
        for (name, text) in BUILTIN_SAMPLES {
            report(name, text);
        }
        return;
    }

    for path in &paths {
        match fs::read_to_string(path) {
            Ok(text) => report(path, &text),
            Err(e) => error!("❌ 无法读取 {}: {}", path, e),
        }
    }
}

/// 输出单个文档的检查结果
fn report(label: &str, text: &str) {
    match svg::inspect_svg(text) {
        Ok(info) => print_info(label, &info),
        Err(e) => error!("❌ {}: {}", label, e),
    }
}

fn print_info(label: &str, info: &SvgInfo) {
    info!("📄 {}", label);
    info!("  width: {}", info.width.as_deref().unwrap_or("(absent)"));
    info!("  height: {}", info.height.as_deref().unwrap_or("(absent)"));
    if let Some(view_box) = &info.view_box {
        info!("  viewBox: {}", view_box);
    }
    if let Some(unit) = &info.unit {
        info!("  unit: {}", unit);
    }
    info!("  source: {}", info.source.label());
    if let Some(note) = &info.note {
        info!("  说明: {}", note);
    }
}
