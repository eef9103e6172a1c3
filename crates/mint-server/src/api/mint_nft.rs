use super::prelude::*;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_mint::NftMetadata;
use solana_sdk::{pubkey::Pubkey, signer::keypair::Keypair};
use std::str::FromStr;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[serde(default)]
    pub solana_address: String,
}

#[derive(Serialize, Debug)]
pub struct Output {
    pub signature: String,
    pub mint_account: String,
    pub metadata_account: String,
    pub associated_token_account: String,
}

pub fn service(config: &Config) -> impl HttpServiceFactory + 'static {
    web::resource("/mint-nft")
        .wrap(config.cors())
        .route(web::post().to(mint_nft))
}

async fn mint_nft(
    params: web::Json<Input>,
    rpc: web::Data<RpcClient>,
    payer: web::Data<Keypair>,
    metadata: web::Data<NftMetadata>,
) -> Result<web::Json<Output>, Error> {
    let address = params.into_inner().solana_address;
    if address.trim().is_empty() {
        return Err(Error::MissingAddress);
    }
    let recipient =
        Pubkey::from_str(address.trim()).map_err(|_| Error::BadAddress(address.clone()))?;

    let minted = solana_mint::mint_nft(&rpc, &payer, &recipient, (**metadata).clone()).await?;

    Ok(web::Json(Output {
        signature: minted.signature.to_string(),
        mint_account: minted.mint_account.to_string(),
        metadata_account: minted.metadata_account.to_string(),
        associated_token_account: minted.associated_token_account.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, test, App};

    async fn post(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let config = Config::default();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(RpcClient::new(
                    "http://localhost:8899".to_owned(),
                )))
                .app_data(web::Data::new(Keypair::new()))
                .app_data(web::Data::new(NftMetadata::from(config.nft.clone())))
                .service(service(&config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/mint-nft")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn missing_address_is_rejected() {
        let (status, body) = post(serde_json::json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "solana wallet address is required");
    }

    #[actix_web::test]
    async fn empty_address_is_rejected() {
        let (status, _) = post(serde_json::json!({ "solanaAddress": " " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_address_is_rejected() {
        let (status, body) = post(serde_json::json!({ "solanaAddress": "not-base58!" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("invalid solana wallet address"));
    }
}
