use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

/// 单个章节导出作业
#[derive(Clone, Debug, Deserialize)]
pub struct SectionJob {
    /// 输入 JSON，需包含顶层 sections 与 questions 数组
    pub input_json: String,
    /// 章节文件输出目录
    pub output_dir: String,
    /// 写入 \input 行的片段目录前缀（LaTeX 视角的相对路径，
    /// 与磁盘上的片段输出目录无关）
    pub fragment_dir: String,
}

/// 程序配置
///
/// 历史上散落的硬编码路径集中在这里，作为显式配置传入各入口，
/// 测试可以注入临时目录
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 片段导出的输入题库
    pub question_json: String,
    /// 片段输出目录
    pub fragment_dir: String,
    /// 章节导出作业列表
    pub section_jobs: Vec<SectionJob>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_json: "data/question_bank.json".to_string(),
            fragment_dir: "output/fragments".to_string(),
            section_jobs: vec![SectionJob {
                input_json: "data/question_bank.json".to_string(),
                output_dir: "output/sections".to_string(),
                fragment_dir: "fragments".to_string(),
            }],
            verbose_logging: false,
            output_log_file: "export_log.txt".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载，未设置的项使用默认值
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            question_json: std::env::var("QUESTION_JSON").unwrap_or(default.question_json),
            fragment_dir: std::env::var("FRAGMENT_DIR").unwrap_or(default.fragment_dir),
            section_jobs: default.section_jobs,
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 从 TOML 配置文件加载完整配置（含章节作业列表）
    pub fn from_toml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path))?;
        Ok(config)
    }

    /// 加载配置
    ///
    /// EXPORT_CONFIG 指向的 TOML 文件优先；加载失败时警告并退回
    /// 环境变量
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("EXPORT_CONFIG") {
            match Self::from_toml_file(&path) {
                Ok(config) => return config,
                Err(e) => warn!("⚠️ 配置文件加载失败，改用环境变量: {:#}", e),
            }
        }
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_one_section_job() {
        let config = Config::default();
        assert_eq!(config.section_jobs.len(), 1);
        assert_eq!(config.section_jobs[0].fragment_dir, "fragments");
    }

    #[test]
    fn test_toml_overrides_and_defaults_mix() {
        let text = r#"
question_json = "in.json"

[[section_jobs]]
input_json = "a.json"
output_dir = "out_a"
fragment_dir = "frags"

[[section_jobs]]
input_json = "b.json"
output_dir = "out_b"
fragment_dir = "frags"
"#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.question_json, "in.json");
        assert_eq!(config.section_jobs.len(), 2);
        assert_eq!(config.section_jobs[1].input_json, "b.json");
        // 未设置的项落回默认值
        assert_eq!(config.fragment_dir, Config::default().fragment_dir);
    }

    #[test]
    fn test_section_job_requires_all_fields() {
        let text = r#"
[[section_jobs]]
input_json = "a.json"
"#;
        assert!(toml::from_str::<Config>(text).is_err());
    }
}
