use std::path::PathBuf;

use solana_sdk::signer::keypair::{read_keypair_file, Keypair};

use crate::error::Error;

/// Load a Solana CLI keypair file (a JSON array of 64 bytes), expanding a
/// leading `~` against `$HOME`.
pub fn load_keypair_file(path: &str) -> crate::Result<Keypair> {
    let path = expand_tilde(path);
    read_keypair_file(&path).map_err(|error| Error::KeypairFile {
        path: path.display().to_string(),
        error: error.to_string(),
    })
}

fn expand_tilde(path: &str) -> PathBuf {
    let home = || PathBuf::from(std::env::var_os("HOME").unwrap_or_default());
    if path == "~" {
        return home();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home().join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;
    use std::io::Write;

    #[test]
    fn load_cli_keypair_file() {
        let keypair = Keypair::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        serde_json::to_writer(&mut file, &keypair.to_bytes()[..]).unwrap();
        file.flush().unwrap();

        let loaded = load_keypair_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let error = load_keypair_file("/no/such/keypair.json").unwrap_err();
        assert!(error.to_string().contains("/no/such/keypair.json"));
    }

    #[test]
    fn tilde_expansion() {
        let home = std::env::var("HOME").unwrap();
        assert_eq!(
            expand_tilde("~/.config/solana/id.json"),
            PathBuf::from(&home).join(".config/solana/id.json")
        );
        assert_eq!(expand_tilde("/etc/id.json"), PathBuf::from("/etc/id.json"));
        assert_eq!(expand_tilde("~"), PathBuf::from(&home));
    }
}
