// ntag215/src/protocol/checksum.rs

use crate::constants::{CASCADE_TAG, UID_LEN};
use crate::memory::TagMemory;

/// Compute BCC0 over the first three UID bytes
/// BCC0 = CT(0x88) ^ uid0 ^ uid1 ^ uid2
pub fn bcc0(uid: &[u8; UID_LEN]) -> u8 {
    uid[..3].iter().fold(CASCADE_TAG, |acc, &b| acc ^ b)
}

/// Compute BCC1 over the last four UID bytes
/// BCC1 = uid3 ^ uid4 ^ uid5 ^ uid6
pub fn bcc1(uid: &[u8; UID_LEN]) -> u8 {
    uid[3..].iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Recompute both check bytes from the UID stored in `memory`. Returns
/// `true` when either stored byte was wrong and both were rewritten.
pub fn fix_uid(memory: &mut TagMemory) -> bool {
    let uid = memory.uid();
    let (expected0, expected1) = (uid.bcc0(), uid.bcc1());

    if memory.bcc0() == expected0 && memory.bcc1() == expected1 {
        return false;
    }

    memory.set_check_bytes(expected0, expected1);
    true
}
