//! Interface for the recovery routines. It contains the recovery outcome type,
//! the error type, and the crypto capability trait.
use core::fmt::{self, Debug};

use alloy_primitives::{keccak256, Address, Bytes, B256, B512};

/// Outcome of running the `ecrecover` precompile on an input.
///
/// The EVM communicates signature invalidity through empty returndata rather than
/// an error. Modeling both outcomes as a sum type keeps callers from slicing into
/// returndata that is not there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecoveryOutcome {
    /// Recovered address, left-padded to the 32-byte word the precompile returns.
    Recovered(B256),
    /// The signature failed validation or did not resolve to a curve point.
    Invalid,
}

impl RecoveryOutcome {
    /// Returns the returndata exactly as the precompile at `0x01` produces it:
    /// 32 bytes on success, empty on invalid input.
    pub fn into_returndata(self) -> Bytes {
        match self {
            Self::Recovered(word) => word.into(),
            Self::Invalid => Bytes::new(),
        }
    }

    /// Returns the recovered address, if any.
    pub fn address(&self) -> Option<Address> {
        match self {
            Self::Recovered(word) => Some(Address::from_word(*word)),
            Self::Invalid => None,
        }
    }

    /// Returns `true` for the empty-returndata outcome.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Error type of [`ec_recover`](crate::secp256k1::ec_recover).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EcRecoverError {
    /// The compact signature buffer was not exactly 65 bytes long.
    InvalidSignatureLength(usize),
    /// The signature failed range validation or public key recovery.
    InvalidSignature,
}

impl core::error::Error for EcRecoverError {}

impl fmt::Display for EcRecoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSignatureLength(len) => {
                write!(f, "compact signature must be 65 bytes, got {len}")
            }
            Self::InvalidSignature => f.write_str("invalid signature"),
        }
    }
}

/// Crypto operations consumed by the recovery routines.
///
/// The curve engine and the hash are injected through this trait so unit tests can
/// substitute deterministic fixtures and a different secp256k1 library can be
/// swapped in without touching the validation logic.
pub trait Crypto: Send + Sync + Debug {
    /// secp256k1 public key recovery.
    ///
    /// `sig` is `r || s` and `recid` is the recovery id in the 0/1 convention.
    /// Returns the uncompressed SEC1 point, or `None` for signatures that do not
    /// resolve to a valid curve point.
    fn secp256k1_recover_pubkey(&self, msg: &B256, sig: &B512, recid: u8) -> Option<[u8; 65]>;

    /// Computes the Keccak-256 hash of `data`.
    fn keccak256(&self, data: &[u8]) -> B256;
}

/// [`Crypto`] implementation backed by the compiled-in secp256k1 backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCrypto;

impl Crypto for DefaultCrypto {
    fn secp256k1_recover_pubkey(&self, msg: &B256, sig: &B512, recid: u8) -> Option<[u8; 65]> {
        crate::secp256k1::recover_pubkey(msg, sig, recid)
    }

    fn keccak256(&self, data: &[u8]) -> B256 {
        keccak256(data)
    }
}
