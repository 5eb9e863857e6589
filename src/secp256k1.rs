//! `ecrecover` precompile emulation.
//!
//! Depending on enabled features, it will use different implementations of the
//! curve engine:
//! * [`k256`](https://crates.io/crates/k256) - uses maintained pure rust lib `k256`, it is perfect use for no_std environments.
//! * [`secp256k1`](https://crates.io/crates/secp256k1) - uses `bitcoin_secp256k1` lib, it is a C implementation of secp256k1 used in bitcoin core.
//!   It is faster than k256 and enabled by default and in std environment.
//!
//! Input format:
//! [32 bytes for hash][32 bytes for v][32 bytes for r][32 bytes for s]
//!
//! Output format:
//! [32 bytes for the left-padded recovered address], empty when the signature
//! does not validate.

use crate::{
    interface::{Crypto, DefaultCrypto, EcRecoverError, RecoveryOutcome},
    utilities::right_pad,
};
use alloy_primitives::{Address, B256, B512, U256};

cfg_if::cfg_if! {
    if #[cfg(feature = "secp256k1")] {
        /// Bitcoin secp256k1 backend
        pub mod bitcoin_secp256k1;
        pub use bitcoin_secp256k1::recover_pubkey;
    } else {
        /// K256 backend
        pub mod k256;
        pub use self::k256::recover_pubkey;
    }
}

/// Order `N` of the secp256k1 group, big-endian.
pub const SECP256K1N: U256 = U256::from_be_bytes([
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
]);

/// The order of the secp256k1 curve, divided by two. Signatures that should be
/// checked according to EIP-2 should have an S value less than or equal to this.
pub const SECP256K1N_HALF: U256 = U256::from_be_bytes([
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
]);

/// Checks whether `(recid, r, s)` form a usable signature.
///
/// `recid` must be 0 or 1 and `r`/`s` must lie in the open range `(0, N)`. The
/// stricter homestead bound `s <= N/2` applies only when `enforce_low_s` is set;
/// transaction signatures want it, the precompile does not.
pub fn validate_signature_values(recid: u8, r: U256, s: U256, enforce_low_s: bool) -> bool {
    if r.is_zero() || s.is_zero() {
        return false;
    }
    if enforce_low_s && s > SECP256K1N_HALF {
        return false;
    }
    r < SECP256K1N && s < SECP256K1N && matches!(recid, 0 | 1)
}

/// The four 32-byte words of the precompile calldata: hash, v, r, s.
///
/// Encoding and decoding go through this struct so the fixed layout lives in one
/// place instead of being re-derived with offset arithmetic at every call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcRecoverInput {
    /// Message hash the signature was made over.
    pub hash: B256,
    /// Recovery id word. Only the low byte may be set; it carries `v` in the
    /// legacy 27/28 convention.
    pub v: B256,
    /// Signature `r`, big-endian.
    pub r: B256,
    /// Signature `s`, big-endian.
    pub s: B256,
}

impl EcRecoverInput {
    /// Encoded calldata length.
    pub const ENCODED_LEN: usize = 128;

    /// Splits a normalized 128-byte calldata view into its words.
    pub fn decode(words: &[u8; Self::ENCODED_LEN]) -> Self {
        Self {
            hash: B256::from_slice(&words[0..32]),
            v: B256::from_slice(&words[32..64]),
            r: B256::from_slice(&words[64..96]),
            s: B256::from_slice(&words[96..128]),
        }
    }

    /// Packs the words back into precompile calldata.
    pub fn encode(&self) -> [u8; Self::ENCODED_LEN] {
        let mut out = [0u8; Self::ENCODED_LEN];
        out[0..32].copy_from_slice(self.hash.as_slice());
        out[32..64].copy_from_slice(self.v.as_slice());
        out[64..96].copy_from_slice(self.r.as_slice());
        out[96..128].copy_from_slice(self.s.as_slice());
        out
    }
}

/// `ecrecover` precompile function, using the compiled-in crypto backend. Read
/// more about the input and output format in [this module's docs](self).
///
/// Inputs shorter than 128 bytes are zero-extended on the right; longer inputs
/// are truncated to the first 128 bytes.
pub fn ec_recover_run(input: &[u8]) -> RecoveryOutcome {
    ec_recover_run_with(&DefaultCrypto, input)
}

/// [`ec_recover_run`] over a caller-supplied [`Crypto`] backend.
pub fn ec_recover_run_with(crypto: &dyn Crypto, input: &[u8]) -> RecoveryOutcome {
    let input = right_pad::<128>(input);
    let words = EcRecoverInput::decode(&input);

    // `v` is a 32-byte big-endian integer equal to 27 or 28. The wrapping
    // subtraction sends any byte below 27 out of the 0/1 range.
    let recid = words.v[31].wrapping_sub(27);
    let r = U256::from_be_bytes(words.r.0);
    let s = U256::from_be_bytes(words.s.0);

    // Tighter s bounds apply to transaction signatures only, never here.
    if !(words.v[..31].iter().all(|&b| b == 0) && validate_signature_values(recid, r, s, false)) {
        return RecoveryOutcome::Invalid;
    }

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(words.r.as_slice());
    sig[32..].copy_from_slice(words.s.as_slice());

    // The curve engine takes the recovery id separately, after r || s.
    let Some(pubkey) = crypto.secp256k1_recover_pubkey(&words.hash, &B512::from(sig), recid)
    else {
        return RecoveryOutcome::Invalid;
    };

    // The first byte of the SEC1 point is the format marker; the address is
    // derived from the raw 64 coordinate bytes.
    let mut hash = crypto.keccak256(&pubkey[1..]);
    hash[..12].fill(0);
    RecoveryOutcome::Recovered(hash)
}

/// Recovers the address behind an Ethereum compact signature, by casting the
/// inputs into precompile calldata and running [`ec_recover_run`].
///
/// `vrs` is the 65-byte `v || r || s` layout with `v` in the 27/28 convention.
/// Useful for checking that a signing implementation complies with the
/// `ecrecover` standard.
pub fn ec_recover(hash: B256, vrs: &[u8]) -> Result<Address, EcRecoverError> {
    ec_recover_with(&DefaultCrypto, hash, vrs)
}

/// [`ec_recover`] over a caller-supplied [`Crypto`] backend.
pub fn ec_recover_with(
    crypto: &dyn Crypto,
    hash: B256,
    vrs: &[u8],
) -> Result<Address, EcRecoverError> {
    if vrs.len() != 65 {
        return Err(EcRecoverError::InvalidSignatureLength(vrs.len()));
    }

    // Calldata bytes [32..63] stay zero by construction, which is exactly what
    // the emulator's padding gate requires.
    let input = EcRecoverInput {
        hash,
        v: B256::with_last_byte(vrs[0]),
        r: B256::from_slice(&vrs[1..33]),
        s: B256::from_slice(&vrs[33..65]),
    };

    match ec_recover_run_with(crypto, &input.encode()) {
        RecoveryOutcome::Recovered(word) => Ok(Address::from_word(word)),
        RecoveryOutcome::Invalid => Err(EcRecoverError::InvalidSignature),
    }
}
