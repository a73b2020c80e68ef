//! Schnorr (BIP-340) signature signing and verification.

use rand::{rngs::OsRng, RngCore};
use rollup_primitives::{Buf32, Buf64};
use secp256k1::{schnorr::Signature, Keypair, Message, SecretKey, XOnlyPublicKey, SECP256K1};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchnorrError {
    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("invalid message hash")]
    InvalidMessage,
}

/// Generates a fresh secret key from the OS rng.
pub fn generate_secret_key() -> Buf32 {
    let mut rng = OsRng;
    loop {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        // Out-of-range scalars are astronomically rare, just redraw.
        if SecretKey::from_slice(&bytes).is_ok() {
            return Buf32::from(bytes);
        }
    }
}

/// Returns the x-only public key for a secret key.
pub fn pubkey_from_secret(sk: &Buf32) -> Result<Buf32, SchnorrError> {
    let sk = SecretKey::from_slice(sk.as_ref()).map_err(|_| SchnorrError::InvalidSecretKey)?;
    let kp = Keypair::from_secret_key(SECP256K1, &sk);
    let (xonly, _parity) = kp.x_only_public_key();
    Ok(Buf32::from(xonly.serialize()))
}

/// Sign a message with a Schnorr signature.
pub fn sign_schnorr_sig(msg: &Buf32, sk: &Buf32) -> Result<Buf64, SchnorrError> {
    let sk = SecretKey::from_slice(sk.as_ref()).map_err(|_| SchnorrError::InvalidSecretKey)?;
    let kp = Keypair::from_secret_key(SECP256K1, &sk);
    let msg = Message::from_digest_slice(msg.as_ref()).map_err(|_| SchnorrError::InvalidMessage)?;
    let sig = SECP256K1.sign_schnorr_no_aux_rand(&msg, &kp);
    Ok(Buf64::from(sig.serialize()))
}

/// Verify a Schnorr signature against an x-only public key.
pub fn verify_schnorr_sig(sig: &Buf64, msg: &Buf32, pk: &Buf32) -> bool {
    let msg = match Message::from_digest_slice(msg.as_ref()) {
        Ok(msg) => msg,
        Err(_) => return false,
    };

    let pk = match XOnlyPublicKey::from_slice(pk.as_ref()) {
        Ok(pk) => pk,
        Err(_) => return false,
    };

    let sig = match Signature::from_slice(sig.as_ref()) {
        Ok(sig) => sig,
        Err(_) => return false,
    };

    sig.verify(&msg, &pk).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schnorr_signature_pass() {
        let sk = generate_secret_key();
        let pk = pubkey_from_secret(&sk).unwrap();
        let msg = Buf32::from([7u8; 32]);

        let sig = sign_schnorr_sig(&msg, &sk).unwrap();
        assert!(verify_schnorr_sig(&sig, &msg, &pk));
    }

    #[test]
    fn test_schnorr_signature_fail() {
        let sk = generate_secret_key();
        let pk = pubkey_from_secret(&sk).unwrap();
        let msg = Buf32::from([7u8; 32]);
        let sig = sign_schnorr_sig(&msg, &sk).unwrap();

        let other_msg = Buf32::from([8u8; 32]);
        assert!(!verify_schnorr_sig(&sig, &other_msg, &pk));

        let other_pk = pubkey_from_secret(&generate_secret_key()).unwrap();
        assert!(!verify_schnorr_sig(&sig, &msg, &other_pk));

        let mut tampered = sig;
        tampered.0[0] ^= 1;
        assert!(!verify_schnorr_sig(&tampered, &msg, &pk));
    }

    #[test]
    fn test_invalid_secret_key() {
        assert_eq!(
            pubkey_from_secret(&Buf32::zero()),
            Err(SchnorrError::InvalidSecretKey)
        );
        assert_eq!(
            sign_schnorr_sig(&Buf32::zero(), &Buf32::zero()),
            Err(SchnorrError::InvalidSecretKey)
        );
    }

    #[test]
    fn test_garbage_pubkey_does_not_verify() {
        let sig = Buf64::from([1u8; 64]);
        assert!(!verify_schnorr_sig(&sig, &Buf32::zero(), &Buf32::zero()));
    }
}
