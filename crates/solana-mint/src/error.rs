use std::result::Result as StdResult;

use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    rpc_request::{RpcError, RpcResponseErrorData},
    rpc_response::RpcSimulateTransactionResult,
};
use thiserror::Error as ThisError;

pub type Result<T> = StdResult<T, Error>;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{}", verbose_solana_error(.0))]
    SolanaClient(#[from] solana_client::client_error::ClientError),
    #[error(transparent)]
    SolanaProgram(#[from] solana_sdk::program_error::ProgramError),
    #[error(transparent)]
    Signer(#[from] solana_sdk::signer::SignerError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("failed to read keypair file {path}: {error}")]
    KeypairFile { path: String, error: String },
    #[error("cannot combine instructions with different fee payers")]
    FeePayerMismatch,
    #[error("insufficient solana balance, needed={needed}; have={balance};")]
    InsufficientSolanaBalance { needed: u64, balance: u64 },
}

/// Include preflight simulation logs when an RPC submission is rejected,
/// they usually name the failing instruction.
pub fn verbose_solana_error(err: &ClientError) -> String {
    use std::fmt::Write;
    if let ClientErrorKind::RpcError(RpcError::RpcResponseError {
        code,
        message,
        data,
    }) = &err.kind
    {
        let mut s = String::new();
        writeln!(s, "{} ({})", message, code).unwrap();
        if let RpcResponseErrorData::SendTransactionPreflightFailure(
            RpcSimulateTransactionResult {
                logs: Some(logs), ..
            },
        ) = data
        {
            for (i, log) in logs.iter().enumerate() {
                writeln!(s, "{}: {}", i + 1, log).unwrap();
            }
        }
        s
    } else {
        err.to_string()
    }
}
