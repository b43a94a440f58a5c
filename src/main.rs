use anyhow::Result;
use quiz_taker::app::App;
use quiz_taker::config::Config;
use quiz_taker::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置（命令行第一个参数可覆盖测验ID）
    let mut config = Config::from_env();
    if let Some(quiz_id) = std::env::args().nth(1) {
        config.quiz_id = quiz_id;
    }

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    if let Some(mut app) = App::initialize(config).await? {
        app.run()?;
    }

    Ok(())
}
