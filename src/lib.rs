//! # eth-ecrecover
//!
//! EVM-exact emulation of the `ecrecover` precompiled contract at address `0x01`.
//!
//! Given a message hash and a secp256k1 ECDSA signature `(v, r, s)`, recovers the
//! signer's 20-byte address with the same byte-for-byte behavior as the precompile,
//! so wallets, bridges and test harnesses can verify Ethereum signature recovery
//! without running an EVM. Invalid signatures produce empty returndata, never an
//! error, matching the chain.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod interface;
pub mod secp256k1;
pub mod utilities;

pub use interface::*;
pub use self::secp256k1::{
    ec_recover, ec_recover_run, ec_recover_run_with, ec_recover_with, validate_signature_values,
    EcRecoverInput, SECP256K1N, SECP256K1N_HALF,
};
