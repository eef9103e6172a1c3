use mpl_token_metadata::accounts::Metadata;
use mpl_token_metadata::types::DataV2;
use serde::{Deserialize, Serialize};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signer::{keypair::Keypair, Signer},
    system_program,
};

use crate::instructions::{Instructions, KeypairExt};

/// Descriptive fields attached to the mint through the token metadata
/// program. Creators, collection, and uses are not populated.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NftMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    #[serde(default)]
    pub seller_fee_basis_points: u16,
}

impl From<NftMetadata> for DataV2 {
    fn from(metadata: NftMetadata) -> Self {
        DataV2 {
            name: metadata.name,
            symbol: metadata.symbol,
            uri: metadata.uri,
            seller_fee_basis_points: metadata.seller_fee_basis_points,
            creators: None,
            collection: None,
            uses: None,
        }
    }
}

/// Instruction creating the metadata PDA for a mint. Returns the PDA
/// alongside.
pub async fn create_metadata_account(
    rpc: &RpcClient,
    fee_payer: &Keypair,
    update_authority: &Keypair,
    mint_account: &Pubkey,
    mint_authority: &Pubkey,
    metadata: NftMetadata,
    is_mutable: bool,
) -> crate::Result<(Instructions, Pubkey)> {
    let (metadata_account, _) = Metadata::find_pda(mint_account);

    let minimum_balance_for_rent_exemption = rpc
        .get_minimum_balance_for_rent_exemption(std::mem::size_of::<Metadata>())
        .await?;

    let create_ix = mpl_token_metadata::instructions::CreateMetadataAccountV3 {
        metadata: metadata_account,
        mint: *mint_account,
        mint_authority: *mint_authority,
        payer: fee_payer.pubkey(),
        update_authority: (update_authority.pubkey(), true),
        system_program: system_program::id(),
        rent: None,
    };

    let args = mpl_token_metadata::instructions::CreateMetadataAccountV3InstructionArgs {
        data: metadata.into(),
        is_mutable,
        collection_details: None,
    };

    let ins = Instructions {
        fee_payer: fee_payer.pubkey(),
        signers: [fee_payer.clone_keypair(), update_authority.clone_keypair()].into(),
        instructions: [create_ix.instruction(args)].into(),
        minimum_balance_for_rent_exemption,
    };

    Ok((ins, metadata_account))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_v2_conversion() {
        let metadata = NftMetadata {
            name: "Student NFT".to_owned(),
            symbol: "BRUNEL".to_owned(),
            uri: "https://example.com/nft.json".to_owned(),
            seller_fee_basis_points: 500,
        };
        let data = DataV2::from(metadata);
        assert_eq!(data.name, "Student NFT");
        assert_eq!(data.symbol, "BRUNEL");
        assert_eq!(data.seller_fee_basis_points, 500);
        assert!(data.creators.is_none());
        assert!(data.collection.is_none());
        assert!(data.uses.is_none());
    }

    #[test]
    fn seller_fee_defaults_to_zero() {
        let metadata: NftMetadata = serde_json::from_str(
            r#"{"name":"n","symbol":"s","uri":"https://example.com/n.json"}"#,
        )
        .unwrap();
        assert_eq!(metadata.seller_fee_basis_points, 0);
    }

    #[test]
    fn metadata_pda_is_stable() {
        let mint = Pubkey::new_unique();
        assert_eq!(Metadata::find_pda(&mint), Metadata::find_pda(&mint));
    }
}
