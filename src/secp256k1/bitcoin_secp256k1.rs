//! bitcoin_secp256k1 implementation of the curve engine. More about it in [`crate::secp256k1`].
use alloy_primitives::{B256, B512};
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, SECP256K1,
};

// Silence the unused crate dependency warning.
use k256 as _;

/// Recover the uncompressed public key from a signature and a message.
///
/// This function is using the `secp256k1` crate, it is enabled by the `secp256k1`
/// feature and it is in default.
pub fn recover_pubkey(msg: &B256, sig: &B512, recid: u8) -> Option<[u8; 65]> {
    let recid = RecoveryId::from_i32(recid as i32).ok()?;
    let sig = RecoverableSignature::from_compact(sig.as_slice(), recid).ok()?;

    let msg = Message::from_digest(msg.0);
    let public = SECP256K1.recover_ecdsa(&msg, &sig).ok()?;

    Some(public.serialize_uncompressed())
}
