use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    program_pack::Pack,
    pubkey::Pubkey,
    signer::{keypair::Keypair, Signer},
    system_instruction,
};
use spl_token::state::Mint;

use crate::instructions::{Instructions, KeypairExt};

/// Create a rent-exempt mint account owned by the token program and
/// initialize it. NFT mints use 0 decimals and no freeze authority.
pub async fn create_mint_account(
    rpc: &RpcClient,
    fee_payer: &Keypair,
    mint_account: &Keypair,
    mint_authority: &Keypair,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
) -> crate::Result<Instructions> {
    let minimum_balance_for_rent_exemption = rpc
        .get_minimum_balance_for_rent_exemption(Mint::LEN)
        .await?;

    Ok(Instructions {
        fee_payer: fee_payer.pubkey(),
        signers: [
            fee_payer.clone_keypair(),
            mint_authority.clone_keypair(),
            mint_account.clone_keypair(),
        ]
        .into(),
        instructions: [
            system_instruction::create_account(
                &fee_payer.pubkey(),
                &mint_account.pubkey(),
                minimum_balance_for_rent_exemption,
                Mint::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_mint2(
                &spl_token::id(),
                &mint_account.pubkey(),
                &mint_authority.pubkey(),
                freeze_authority,
                decimals,
            )?,
        ]
        .into(),
        minimum_balance_for_rent_exemption,
    })
}
