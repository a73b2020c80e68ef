use std::{
    fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;
use rollup_checkpoint_types::ValidatorId;
use rollup_crypto::schnorr::pubkey_from_secret;
use rollup_primitives::Buf32;
use tracing::*;

/// Loads a hex encoded secret key from a file.
pub(crate) fn load_secret_key(path: &Path) -> anyhow::Result<Buf32> {
    debug!(?path, "loading secret key");
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read key file {}", path.display()))?;
    let sk: Buf32 = raw
        .trim()
        .parse()
        .with_context(|| format!("malformed key in {}", path.display()))?;

    // Log the identity, never the key.
    let ident = validator_id(&sk)?;
    debug!(%ident, "ready to sign as validator");

    Ok(sk)
}

pub(crate) fn validator_id(sk: &Buf32) -> anyhow::Result<ValidatorId> {
    let pk = pubkey_from_secret(sk).context("invalid secret key")?;
    Ok(ValidatorId::new(pk))
}

/// Current host time in unix seconds, unless overridden.
pub(crate) fn host_time(overridden: Option<u64>) -> anyhow::Result<u64> {
    match overridden {
        Some(now) => Ok(now),
        None => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before unix epoch")?
            .as_secs()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rollup_crypto::schnorr::generate_secret_key;

    use super::*;

    #[test]
    fn test_load_secret_key_roundtrip() {
        let sk = generate_secret_key();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{sk}").unwrap();

        let loaded = load_secret_key(file.path()).unwrap();
        assert_eq!(loaded, sk);
        assert_eq!(
            validator_id(&loaded).unwrap(),
            ValidatorId::new(pubkey_from_secret(&sk).unwrap())
        );
    }

    #[test]
    fn test_load_secret_key_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a key").unwrap();
        assert!(load_secret_key(file.path()).is_err());
        assert!(load_secret_key(&file.path().with_extension("missing")).is_err());
    }

    #[test]
    fn test_host_time_override() {
        assert_eq!(host_time(Some(42)).unwrap(), 42);
        assert!(host_time(None).unwrap() > 0);
    }
}
