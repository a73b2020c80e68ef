//! Cryptographic primitives.

pub mod schnorr;

pub use schnorr::{
    generate_secret_key, pubkey_from_secret, sign_schnorr_sig, verify_schnorr_sig, SchnorrError,
};
