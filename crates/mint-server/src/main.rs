use actix_web::{middleware::Logger, web, App, HttpServer};
use futures_util::future::ok;
use mint_server::{
    api::{self, prelude::Success},
    Config,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_mint::{keypair::load_keypair_file, NftMetadata};
use solana_sdk::signer::Signer;
use std::convert::Infallible;

#[actix_web::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::get_config();

    tracing::info!("allow CORS origins: {:?}", config.cors_origins);

    let payer = match load_keypair_file(&config.keypair_path) {
        Ok(keypair) => keypair,
        Err(e) => {
            tracing::error!("failed to load payer keypair: {}", e);
            return;
        }
    };
    tracing::info!("payer: {}", payer.pubkey());

    let url = config.solana_net.url();
    tracing::info!("solana cluster: {}", url);

    let rpc = web::Data::new(RpcClient::new(url));
    let payer = web::Data::new(payer);
    let metadata = web::Data::new(NftMetadata::from(config.nft.clone()));

    let host = config.host.clone();
    let port = config.port;

    tracing::info!("listening on {:?} port {:?}", host, port);

    HttpServer::new(move || {
        let healthcheck = web::resource("/healthcheck")
            .route(web::get().to(|()| ok::<_, Infallible>(web::Json(Success))));

        App::new()
            .wrap(Logger::new(r#""%r" %s %b %Dms"#).exclude("/healthcheck"))
            .app_data(rpc.clone())
            .app_data(payer.clone())
            .app_data(metadata.clone())
            .service(api::mint_nft::service(&config))
            .service(healthcheck)
    })
    .bind((host, port))
    .unwrap()
    .run()
    .await
    .unwrap();
}
