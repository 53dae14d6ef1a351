use clap::Parser;

use minijudge::config::CliArgs;
use minijudge::web_server::build_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = CliArgs::parse();
    let config = cli.to_config().expect("Failed to load configuration");

    let address = config
        .server
        .bind_address
        .clone()
        .unwrap_or("127.0.0.1".to_string());
    let port = config.server.bind_port.unwrap_or(3000);

    let server = build_server(config)?;

    log::info!("minijudge listening at http://{address}:{port}");
    log::info!("visit http://{address}:{port}/leetcode to start coding");

    server.await
}
