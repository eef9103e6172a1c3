use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::Signature,
    signer::{keypair::Keypair, Signer},
    transaction::Transaction,
};

use crate::error::Error;

pub trait KeypairExt {
    fn clone_keypair(&self) -> Self;
}

impl KeypairExt for Keypair {
    fn clone_keypair(&self) -> Self {
        Self::from_bytes(&self.to_bytes()).unwrap()
    }
}

/// One transaction's worth of instructions, together with the keypairs that
/// must sign it and the rent the transaction is expected to fund.
#[derive(Default, Debug)]
pub struct Instructions {
    pub fee_payer: Pubkey,
    pub signers: Vec<Keypair>,
    pub instructions: Vec<Instruction>,
    pub minimum_balance_for_rent_exemption: u64,
}

impl Instructions {
    pub fn combine(&mut self, next: Self) -> Result<(), Self> {
        if next.fee_payer != self.fee_payer {
            return Err(next);
        }

        self.signers.extend(next.signers);
        self.instructions.extend(next.instructions);
        self.minimum_balance_for_rent_exemption += next.minimum_balance_for_rent_exemption;

        Ok(())
    }

    /// Build, sign, and submit the transaction, waiting for confirmed
    /// commitment. Fails before submission if the fee payer cannot cover
    /// rent plus fees.
    pub async fn execute(self, rpc: &RpcClient) -> crate::Result<Signature> {
        let recent_blockhash = rpc.get_latest_blockhash().await?;

        let message = Message::new_with_blockhash(
            &self.instructions,
            Some(&self.fee_payer),
            &recent_blockhash,
        );

        let balance = rpc.get_balance(&self.fee_payer).await?;
        let needed =
            self.minimum_balance_for_rent_exemption + rpc.get_fee_for_message(&message).await?;
        if balance < needed {
            return Err(Error::InsufficientSolanaBalance { needed, balance });
        }

        let mut tx = Transaction::new_unsigned(message);

        // The same keypair may have been contributed by several builders.
        let mut signers = Vec::<&Keypair>::with_capacity(self.signers.len());
        for keypair in &self.signers {
            if !signers.iter().any(|s| s.pubkey() == keypair.pubkey()) {
                signers.push(keypair);
            }
        }
        tx.try_sign(&signers, recent_blockhash)?;

        let commitment = CommitmentConfig::confirmed();
        tracing::trace!("submitting transaction");
        let signature = rpc
            .send_and_confirm_transaction_with_spinner_and_commitment(&tx, commitment)
            .await?;

        Ok(signature)
    }
}
