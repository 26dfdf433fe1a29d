//! SVG 尺寸检查
//!
//! 只对第一个 <svg ...> 开始标签做字面模式匹配，不做 XML 解析。
//! 属性值里出现的 `>` 会提前截断标签匹配，这是已知限制，不在
//! 这里修复

use crate::error::{AppError, AppResult};
use regex::Regex;

/// 宽高信息的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSource {
    /// 来自 width/height 属性
    Attributes,
    /// 由 viewBox 的第三、第四个数推导
    ViewBox,
    /// 两者都不可用
    Missing,
}

impl SizeSource {
    /// 报告用的标签文本
    pub fn label(self) -> &'static str {
        match self {
            SizeSource::Attributes => "attributes",
            SizeSource::ViewBox => "viewBox aspect ratio",
            SizeSource::Missing => "missing",
        }
    }
}

/// 单个 SVG 文档的检查结果
#[derive(Debug, Clone)]
pub struct SvgInfo {
    pub width: Option<String>,
    pub height: Option<String>,
    pub view_box: Option<String>,
    pub unit: Option<String>,
    pub source: SizeSource,
    /// 宽高不可用时的说明
    pub note: Option<String>,
}

/// 可识别的单位后缀，`rem` 必须排在 `em` 之前
const UNIT_SUFFIXES: &[&str] = &["%", "px", "rem", "em", "pt", "in"];

/// 检查 SVG 文本的宽高信息
///
/// - 定位第一个 `<svg ...>` 开始标签（到第一个 `>` 为止），
///   找不到返回 SvgRootMissing
/// - width/height 属性缺失但 viewBox 恰好拆成 4 个数时，宽高取
///   第三、第四个数，单位记为 "unitless (from viewBox)"
/// - 显式 width 带可识别单位后缀时原样报告，否则记为
///   "unitless (default px)"
pub fn inspect_svg(text: &str) -> AppResult<SvgInfo> {
    let root_re = Regex::new(r"(?is)<svg\b[^>]*>")?;
    let tag = root_re.find(text).ok_or(AppError::SvgRootMissing)?.as_str();

    let width = find_attr(tag, "width")?;
    let height = find_attr(tag, "height")?;
    let view_box = find_attr(tag, "viewBox")?;

    if width.is_none() && height.is_none() {
        if let Some(raw) = &view_box {
            let tokens: Vec<&str> = raw
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .collect();
            if tokens.len() == 4 {
                return Ok(SvgInfo {
                    width: Some(tokens[2].to_string()),
                    height: Some(tokens[3].to_string()),
                    view_box: view_box.clone(),
                    unit: Some("unitless (from viewBox)".to_string()),
                    source: SizeSource::ViewBox,
                    note: None,
                });
            }
        }
        return Ok(SvgInfo {
            width: None,
            height: None,
            view_box,
            unit: None,
            source: SizeSource::Missing,
            note: Some("width/height 属性与可用的 viewBox 均未找到".to_string()),
        });
    }

    let unit = width.as_deref().map(detect_unit);
    Ok(SvgInfo {
        width,
        height,
        view_box,
        unit,
        source: SizeSource::Attributes,
        note: None,
    })
}

/// 在开始标签文本里查找单个属性值
///
/// 大小写不敏感，容忍双引号/单引号/无引号三种写法
fn find_attr(tag: &str, name: &str) -> AppResult<Option<String>> {
    let pattern = format!(
        r#"(?i)(?:^|\s){}\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#,
        name
    );
    let re = Regex::new(&pattern)?;
    Ok(re.captures(tag).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string())
    }))
}

/// 从 width 属性值识别单位后缀
fn detect_unit(width: &str) -> String {
    let lowered = width.to_ascii_lowercase();
    for suffix in UNIT_SUFFIXES {
        if lowered.ends_with(suffix) {
            return (*suffix).to_string();
        }
    }
    "unitless (default px)".to_string()
}
