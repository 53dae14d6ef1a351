use std::path::PathBuf;

use actix_web::{App, HttpServer, dev::Server, middleware, web};

use crate::config::Config;
use crate::routes::{self, StaticDir, json_error_handler};

pub fn build_server(config: Config) -> std::io::Result<Server> {
    let Config {
        server: server_config,
        execution,
        problems,
    } = config;

    let execution = web::Data::new(execution);
    let problems = web::Data::new(problems);
    let static_dir = web::Data::new(StaticDir(PathBuf::from(
        server_config.public_dir.unwrap_or("public".to_string()),
    )));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(execution.clone())
            .app_data(problems.clone())
            .app_data(static_dir.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(middleware::Logger::default())
            .service(routes::run_code_handler)
            .service(routes::get_problem_handler)
            .service(routes::index_page)
            .service(routes::about_page)
            .service(routes::leetcode_page)
            .service(routes::static_asset)
    })
    .bind((
        server_config
            .bind_address
            .unwrap_or("127.0.0.1".to_string()),
        server_config.bind_port.unwrap_or(3000),
    ))?
    .run();

    Ok(server)
}
