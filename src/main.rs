use anyhow::Result;
use question_tex_export::logger;
use question_tex_export::App;
use question_tex_export::Config;

fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::load();

    // 初始化并运行应用
    App::initialize(config)?.run()?;

    Ok(())
}
