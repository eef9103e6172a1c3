use actix_web::http::header::HeaderValue;
use serde::Deserialize;
use solana_mint::NftMetadata;
use std::sync::LazyLock;

pub mod api;
pub mod error;

fn match_wildcard(pat: &str, origin: &HeaderValue) -> bool {
    let Ok(mut origin_str) = origin.to_str() else {
        return false;
    };

    let mut segments = pat.split('*');

    let Some(first) = segments.next() else {
        return false;
    };
    origin_str = match origin_str.strip_prefix(first) {
        Some(s) => s,
        None => return false,
    };

    for s in segments {
        if s.is_empty() {
            continue;
        }
        match origin_str.find(s) {
            Some(pos) => {
                let wildcard = &origin_str[..pos];
                if !wildcard.chars().all(|c| c.is_ascii_alphanumeric()) {
                    return false;
                }
                origin_str = &origin_str[pos..];
            }
            None => {
                return false;
            }
        }
    }

    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SolanaNet {
    #[serde(rename = "devnet")]
    Devnet,
    #[serde(rename = "testnet")]
    Testnet,
    #[serde(rename = "mainnet-beta")]
    Mainnet,
}

impl SolanaNet {
    pub fn url(&self) -> String {
        match self {
            SolanaNet::Devnet => {
                static URL: LazyLock<String> = LazyLock::new(|| {
                    std::env::var("SOLANA_DEVNET_URL")
                        .unwrap_or_else(|_| "https://api.devnet.solana.com".to_owned())
                });
                URL.clone()
            }
            SolanaNet::Testnet => {
                static URL: LazyLock<String> = LazyLock::new(|| {
                    std::env::var("SOLANA_TESTNET_URL")
                        .unwrap_or_else(|_| "https://api.testnet.solana.com".to_owned())
                });
                URL.clone()
            }
            SolanaNet::Mainnet => {
                static URL: LazyLock<String> = LazyLock::new(|| {
                    std::env::var("SOLANA_MAINNET_URL")
                        .unwrap_or_else(|_| "https://api.mainnet-beta.solana.com".to_owned())
                });
                URL.clone()
            }
        }
    }
}

/// Fields written into each minted token's metadata account.
#[derive(Deserialize, Clone)]
pub struct NftConfig {
    #[serde(default = "NftConfig::default_name")]
    pub name: String,
    #[serde(default = "NftConfig::default_symbol")]
    pub symbol: String,
    #[serde(default = "NftConfig::default_uri")]
    pub uri: String,
    #[serde(default = "NftConfig::default_seller_fee_basis_points")]
    pub seller_fee_basis_points: u16,
}

impl NftConfig {
    pub fn default_name() -> String {
        "Student NFT".to_owned()
    }

    pub fn default_symbol() -> String {
        "BRUNEL".to_owned()
    }

    pub fn default_uri() -> String {
        "https://raw.githubusercontent.com/Bigballee/Solana-NFT-Marketplace/refs/heads/master/assets/example.json"
            .to_owned()
    }

    pub fn default_seller_fee_basis_points() -> u16 {
        500
    }
}

impl Default for NftConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            symbol: Self::default_symbol(),
            uri: Self::default_uri(),
            seller_fee_basis_points: Self::default_seller_fee_basis_points(),
        }
    }
}

impl From<NftConfig> for NftMetadata {
    fn from(nft: NftConfig) -> Self {
        NftMetadata {
            name: nft.name,
            symbol: nft.symbol,
            uri: nft.uri,
            seller_fee_basis_points: nft.seller_fee_basis_points,
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(default = "Config::default_host")]
    pub host: String,
    #[serde(default = "Config::default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    #[serde(default = "Config::default_solana_net")]
    pub solana_net: SolanaNet,
    #[serde(default = "Config::default_keypair_path")]
    pub keypair_path: String,
    #[serde(default)]
    pub nft: NftConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            cors_origins: Vec::new(),
            solana_net: Self::default_solana_net(),
            keypair_path: Self::default_keypair_path(),
            nft: NftConfig::default(),
        }
    }
}

impl Config {
    pub fn default_host() -> String {
        "127.0.0.1".to_owned()
    }

    pub fn default_port() -> u16 {
        3000
    }

    pub fn default_solana_net() -> SolanaNet {
        SolanaNet::Devnet
    }

    pub fn default_keypair_path() -> String {
        "~/.config/solana/id.json".to_owned()
    }

    pub fn get_config() -> Self {
        match std::env::args().nth(1) {
            Some(s) => if s == "-" {
                use std::io::Read;
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|error| {
                        tracing::error!("Error reading STDIN: {}", error);
                    })
                    .map(move |_| buf)
            } else {
                std::fs::read_to_string(s).map_err(|error| {
                    tracing::error!("Error reading config: {}", error);
                })
            }
            .and_then(|s| {
                toml::from_str(&s).map_err(|error| {
                    tracing::error!("Error parsing config: {}", error);
                })
            })
            .map_err(|_| {
                tracing::warn!("Invalid config file, using default");
            })
            .unwrap_or_default(),
            None => {
                tracing::info!("No config specified, using default");
                Config::default()
            }
        }
    }

    /// Build a CORS middleware. With no configured origins any origin is
    /// allowed; configured origins may contain `*` wildcards.
    pub fn cors(&self) -> actix_cors::Cors {
        let mut cors = actix_cors::Cors::default()
            .allow_any_header()
            .allow_any_method();
        if self.cors_origins.is_empty() {
            return cors.allow_any_origin();
        }
        cors = cors.supports_credentials();
        for origin in &self.cors_origins {
            if origin.contains('*') {
                let pattern = origin.clone();
                cors = cors.allowed_origin_fn(move |origin, _| match_wildcard(&pattern, origin));
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_wildcard() {
        assert!(match_wildcard(
            "https://mint-*.example.app",
            &HeaderValue::from_static("https://mint-staging.example.app"),
        ));
        assert!(match_wildcard(
            "https://*.example.app",
            &HeaderValue::from_static("https://wallet.example.app"),
        ));
        assert!(!match_wildcard(
            "https://mint-*.example.app",
            &HeaderValue::from_static("https://mint-a.b.example.app"),
        ));
        assert!(!match_wildcard(
            "https://mint-*.example.app",
            &HeaderValue::from_static("https://evil.com"),
        ));
    }

    #[test]
    fn config_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.solana_net, SolanaNet::Devnet);
        assert_eq!(config.keypair_path, "~/.config/solana/id.json");
        assert_eq!(config.nft.name, "Student NFT");
        assert_eq!(config.nft.symbol, "BRUNEL");
        assert_eq!(config.nft.seller_fee_basis_points, 500);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn config_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            port = 8080
            solana_net = "testnet"
            cors_origins = ["https://mint.example.app"]

            [nft]
            name = "Graduation Badge"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.solana_net, SolanaNet::Testnet);
        assert_eq!(config.cors_origins, ["https://mint.example.app"]);
        assert_eq!(config.nft.name, "Graduation Badge");
        // untouched fields keep their defaults
        assert_eq!(config.nft.symbol, "BRUNEL");
    }

    #[test]
    fn solana_net_urls() {
        assert_eq!(SolanaNet::Devnet.url(), "https://api.devnet.solana.com");
        assert_eq!(SolanaNet::Testnet.url(), "https://api.testnet.solana.com");
        assert_eq!(
            SolanaNet::Mainnet.url(),
            "https://api.mainnet-beta.solana.com"
        );
    }
}
