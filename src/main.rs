use gnss_api::{
    store::SqliteStore,
    util::{config::get_config, connect_to_db, setup_tracing},
    web_interface,
};
use std::process::exit;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    info!("GNSS API {}", env!("CARGO_PKG_VERSION"));

    let http_addr = get_config().get_string("http_addr")?;
    let store = SqliteStore::new(connect_to_db().await?);

    let res = web_interface::start_server(store.clone(), http_addr).await;

    store.close().await;
    info!("Database pool closed");

    handle_result(res);
    Ok(())
}

fn handle_result(res: anyhow::Result<()>) {
    if let Err(err) = res {
        error!("An error occurred: {:?}", err);
        exit(1)
    }
}
