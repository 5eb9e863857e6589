//! k256 implementation of the curve engine. More about it in [`crate::secp256k1`].
use alloy_primitives::{B256, B512};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

/// Recover the uncompressed public key from a signature and a message.
///
/// This function is using the `k256` crate.
pub fn recover_pubkey(msg: &B256, sig: &B512, mut recid: u8) -> Option<[u8; 65]> {
    // parse signature
    let mut sig = Signature::from_slice(sig.as_slice()).ok()?;

    // normalize signature and flip recovery id if needed.
    if let Some(sig_normalized) = sig.normalize_s() {
        sig = sig_normalized;
        recid ^= 1;
    }
    let recid = RecoveryId::from_byte(recid)?;

    // recover key
    let recovered_key = VerifyingKey::recover_from_prehash(&msg[..], &sig, recid).ok()?;

    recovered_key
        .to_encoded_point(/* compress = */ false)
        .as_bytes()
        .try_into()
        .ok()
}
