use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    program_pack::Pack,
    pubkey::Pubkey,
    signer::{keypair::Keypair, Signer},
};
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::instructions::{Instructions, KeypairExt};

pub fn derive_ata(owner: &Pubkey, mint_account: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(owner, mint_account)
}

pub async fn account_exists(rpc: &RpcClient, pubkey: &Pubkey) -> crate::Result<bool> {
    Ok(rpc
        .get_account_with_commitment(pubkey, CommitmentConfig::processed())
        .await?
        .value
        .is_some())
}

/// Instruction creating the owner's associated token account for a mint,
/// funded by the fee payer. Returns the derived account alongside.
pub async fn create_ata(
    rpc: &RpcClient,
    fee_payer: &Keypair,
    owner: &Pubkey,
    mint_account: &Pubkey,
) -> crate::Result<(Instructions, Pubkey)> {
    let minimum_balance_for_rent_exemption = rpc
        .get_minimum_balance_for_rent_exemption(spl_token::state::Account::LEN)
        .await?;

    let instruction = create_associated_token_account(
        &fee_payer.pubkey(),
        owner,
        mint_account,
        &spl_token::id(),
    );

    let associated_token_account = instruction.accounts[1].pubkey;

    let ins = Instructions {
        fee_payer: fee_payer.pubkey(),
        signers: [fee_payer.clone_keypair()].into(),
        instructions: [instruction].into(),
        minimum_balance_for_rent_exemption,
    };

    Ok((ins, associated_token_account))
}
