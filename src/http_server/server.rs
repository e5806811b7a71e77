use actix_web::{web, App, HttpServer};
use super::routes::routes;
use crate::common::setting::Web;
use crate::driver::device::Client;
use crate::info;

const LOG_TAG: &str = "http_server";

// run server as a submodule
pub async fn run(client: Client, web_setting: &Web) -> std::io::Result<()> {
    let data = web::Data::new(client);
    info!(LOG_TAG, "api server listening on {}:{}", &web_setting.web_host, web_setting.web_port);
    HttpServer::new(move || App::new().app_data(data.clone()).configure(routes))
        .bind((web_setting.web_host.as_str(), web_setting.web_port))?
        .run()
        .await
}
