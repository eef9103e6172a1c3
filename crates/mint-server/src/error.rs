use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("solana wallet address is required")]
    MissingAddress,
    #[error("invalid solana wallet address: {0}")]
    BadAddress(String),
    #[error(transparent)]
    Mint(#[from] solana_mint::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn build<E: ResponseError>(e: &E) -> HttpResponse {
        HttpResponse::build(e.status_code()).json(ErrorBody {
            error: e.to_string(),
        })
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingAddress | Error::BadAddress(_) => StatusCode::BAD_REQUEST,
            Error::Mint(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        ErrorBody::build(self)
    }
}
