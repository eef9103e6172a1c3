use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Signature,
    signer::{keypair::Keypair, Signer},
};

use crate::{
    associated_token_account::{account_exists, create_ata},
    create_metadata_account::{create_metadata_account, NftMetadata},
    create_mint_account::create_mint_account,
    error::Error,
    instructions::Instructions,
    mint_token::mint_token,
    NFT_DECIMALS,
};

/// Accounts touched by a completed mint, plus the transaction signature.
#[derive(Debug)]
pub struct MintNft {
    pub signature: Signature,
    pub mint_account: Pubkey,
    pub metadata_account: Pubkey,
    pub associated_token_account: Pubkey,
}

fn merge(ins: &mut Instructions, next: Instructions) -> crate::Result<()> {
    ins.combine(next).map_err(|_| Error::FeePayerMismatch)
}

/// Mint a fresh one-of-one token to `recipient` in a single transaction:
/// create and initialize the mint, create the recipient's associated token
/// account if it does not exist, attach metadata, and mint one unit. The
/// payer acts as fee payer, mint authority, and update authority; the mint
/// keypair is generated here and discarded after signing.
pub async fn mint_nft(
    rpc: &RpcClient,
    payer: &Keypair,
    recipient: &Pubkey,
    metadata: NftMetadata,
) -> crate::Result<MintNft> {
    let mint_account = Keypair::new();
    tracing::info!(
        mint = %mint_account.pubkey(),
        recipient = %recipient,
        "minting nft"
    );

    let mut ins = create_mint_account(
        rpc,
        payer,
        &mint_account,
        payer,
        None,
        NFT_DECIMALS,
    )
    .await?;

    let (ata_ins, associated_token_account) =
        create_ata(rpc, payer, recipient, &mint_account.pubkey()).await?;
    // A fresh mint never has an existing ATA; the probe keeps the builder
    // reusable for pre-existing mints.
    if account_exists(rpc, &associated_token_account).await? {
        tracing::debug!(
            account = %associated_token_account,
            "associated token account already exists"
        );
    } else {
        merge(&mut ins, ata_ins)?;
    }

    let (metadata_ins, metadata_account) = create_metadata_account(
        rpc,
        payer,
        payer,
        &mint_account.pubkey(),
        &payer.pubkey(),
        metadata,
        true,
    )
    .await?;
    merge(&mut ins, metadata_ins)?;

    merge(
        &mut ins,
        mint_token(
            payer,
            payer,
            &mint_account.pubkey(),
            &associated_token_account,
            1,
            NFT_DECIMALS,
        )?,
    )?;

    let signature = ins.execute(rpc).await?;
    tracing::info!(%signature, "mint transaction confirmed");

    Ok(MintNft {
        signature,
        mint_account: mint_account.pubkey(),
        metadata_account,
        associated_token_account,
    })
}
