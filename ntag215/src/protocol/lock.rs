// ntag215/src/protocol/lock.rs

use std::ops::RangeInclusive;

use crate::memory::TagMemory;
use crate::types::PageIndex;

/// Page ranges gated by the dynamic protection byte, bit 0 first.
pub const DYNAMIC_PROTECTION_RANGES: [RangeInclusive<u8>; 8] = [
    16..=31,
    32..=47,
    48..=63,
    64..=79,
    80..=95,
    96..=111,
    112..=127,
    128..=129,
];

/// Low static lock bits 0-3 (BL-CC, BL-9-4, BL-15-10, L-CC) are block-lock
/// control bits and protect no page of their own.
const STATIC_LOW_CONTROL_BITS: u8 = 0b0000_1111;

/// Whether a reader write to `page` must be refused.
///
/// Derived from the current memory contents on every call. Dynamic
/// protection only applies while the reader has not authenticated.
pub fn is_locked(page: PageIndex, authenticated: bool, memory: &TagMemory) -> bool {
    let page = page.as_u8();
    if page == 0 || page == 1 {
        return true;
    }

    if static_locked(page, memory) {
        return true;
    }

    !authenticated && dynamic_locked(page, memory.dynamic_protection())
}

fn static_locked(page: u8, memory: &TagMemory) -> bool {
    let (low, high) = memory.static_lock();

    // high bit b -> page b + 8
    if (8..16).contains(&page) && high & (1 << (page - 8)) != 0 {
        return true;
    }

    // low bit b (4..8) -> page b + 4
    let low = low & !STATIC_LOW_CONTROL_BITS;
    (8..12).contains(&page) && low & (1 << (page - 4)) != 0
}

fn dynamic_locked(page: u8, mask: u8) -> bool {
    DYNAMIC_PROTECTION_RANGES
        .iter()
        .enumerate()
        .any(|(bit, range)| mask & (1 << bit) != 0 && range.contains(&page))
}
