pub mod mint_nft;

pub mod prelude {
    pub use crate::{error::Error, Config};
    pub use actix_web::{dev::HttpServiceFactory, http::StatusCode, web};
    pub use serde::{Deserialize, Serialize};

    pub struct Success;

    impl Serialize for Success {
        fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;
            let mut s = s.serialize_struct("Success", 1)?;
            s.serialize_field("success", &true)?;
            s.end()
        }
    }
}
