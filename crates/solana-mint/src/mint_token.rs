use solana_sdk::{
    pubkey::Pubkey,
    signer::{keypair::Keypair, Signer},
};
use spl_token::instruction::mint_to_checked;

use crate::instructions::{Instructions, KeypairExt};

/// Instruction minting `amount` raw units to a token account. `decimals`
/// must match the mint or the token program rejects the instruction.
pub fn mint_token(
    fee_payer: &Keypair,
    mint_authority: &Keypair,
    mint_account: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
    decimals: u8,
) -> crate::Result<Instructions> {
    Ok(Instructions {
        fee_payer: fee_payer.pubkey(),
        signers: [fee_payer.clone_keypair(), mint_authority.clone_keypair()].into(),
        instructions: [mint_to_checked(
            &spl_token::id(),
            mint_account,
            recipient,
            &mint_authority.pubkey(),
            &[&fee_payer.pubkey(), &mint_authority.pubkey()],
            amount,
            decimals,
        )?]
        .into(),
        minimum_balance_for_rent_exemption: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NFT_DECIMALS;

    #[test]
    fn builds_token_program_instruction() {
        let fee_payer = Keypair::new();
        let mint_account = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let ins = mint_token(
            &fee_payer,
            &fee_payer,
            &mint_account,
            &recipient,
            1,
            NFT_DECIMALS,
        )
        .unwrap();

        assert_eq!(ins.instructions.len(), 1);
        assert_eq!(ins.instructions[0].program_id, spl_token::id());
        assert_eq!(ins.instructions[0].accounts[0].pubkey, mint_account);
        assert_eq!(ins.instructions[0].accounts[1].pubkey, recipient);
        assert_eq!(ins.minimum_balance_for_rent_exemption, 0);
    }
}
