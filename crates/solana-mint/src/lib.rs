//! Instruction builders and transaction execution for minting a one-of-one,
//! zero-decimal SPL token with attached Metaplex metadata.

pub mod associated_token_account;
pub mod create_metadata_account;
pub mod create_mint_account;
pub mod error;
pub mod instructions;
pub mod keypair;
pub mod mint_nft;
pub mod mint_token;

pub use error::{Error, Result};
pub use instructions::{Instructions, KeypairExt};

pub use create_metadata_account::NftMetadata;
pub use mint_nft::{mint_nft, MintNft};

/// An NFT mint holds exactly one indivisible unit.
pub const NFT_DECIMALS: u8 = 0;
