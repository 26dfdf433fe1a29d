use crate::config::Config;
use crate::export;
use crate::logger;
use anyhow::Result;
use tracing::{error, info};

/// 应用主结构
///
/// 依次运行片段导出作业与全部章节作业，单线程同步执行；
/// 单个作业失败只记录，不影响后续作业
pub struct App {
    config: Config,
}

/// 作业统计
#[derive(Debug, Default)]
struct JobStats {
    completed: usize,
    failed: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logger::init_log_file(&config.output_log_file)?;
        log_startup(&config);
        Ok(Self { config })
    }

    /// 运行全部导出作业
    pub fn run(&self) -> Result<()> {
        let mut stats = JobStats::default();

        // ========== 作业 1: 题目片段导出 ==========
        info!("\n{}", "=".repeat(60));
        info!(
            "📦 片段导出: {} -> {}",
            self.config.question_json, self.config.fragment_dir
        );
        match export::export_fragments(&self.config.question_json, &self.config.fragment_dir) {
            Ok(_) => stats.completed += 1,
            Err(e) => {
                error!("❌ 片段导出作业失败: {}", e);
                stats.failed += 1;
            }
        }

        // ========== 作业 2..n: 章节导出 ==========
        let total_jobs = self.config.section_jobs.len();
        for (index, job) in self.config.section_jobs.iter().enumerate() {
            info!("\n{}", "=".repeat(60));
            info!(
                "📦 章节导出作业 {}/{}: {} -> {}",
                index + 1,
                total_jobs,
                job.input_json,
                job.output_dir
            );
            match export::run_section_job(job) {
                Ok(_) => stats.completed += 1,
                Err(e) => {
                    error!("❌ 章节导出作业失败: {}", e);
                    stats.failed += 1;
                }
            }
        }

        print_final_stats(&stats, &self.config);

        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库导出模式");
    info!("📊 章节作业数: {}", config.section_jobs.len());
    info!("{}", "=".repeat(60));
    if config.verbose_logging {
        for job in &config.section_jobs {
            info!("  作业: {} -> {}", job.input_json, job.output_dir);
        }
    }
}

fn print_final_stats(stats: &JobStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部作业完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.completed, stats.completed + stats.failed);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
