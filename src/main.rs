use std::error::Error;
use dotenv::dotenv;
use keiko_client_rs::common::logger::init_logger;
use keiko_client_rs::common::setting::Settings;
use keiko_client_rs::driver::device::Client;
use keiko_client_rs::http_server::server::run as http_run;
use keiko_client_rs::info;

const LOG_TAG: &str = "main";

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 检查 env 文件
    dotenv().ok();

    // 加载 config
    let settings = Settings::load()?;

    // 设置 logger
    init_logger(&settings.env)?;
    info!(LOG_TAG, "配置已加载，环境: {:?}", settings.env.env);
    log::debug!("配置: {:?}", settings);

    let client = Client::new(&settings.device.address, settings.device.port);
    info!(LOG_TAG, "signal tower at {}:{}", &settings.device.address, settings.device.port);

    // 执行 http 服务器
    http_run(client, &settings.web).await?;

    Ok(())
}
