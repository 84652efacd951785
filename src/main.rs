use anyhow::Result;
use blog_summariser::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logger::init(config.verbose_logging);

    let app = App::initialize(config)?;

    // 带地址参数时只处理一次，否则启动服务
    match std::env::args().nth(1) {
        Some(url) => {
            let output = app.run_once(&url).await?;
            println!("{}", output);
            // 等待后台持久化任务完成
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        }
        None => app.serve().await?,
    }

    Ok(())
}
