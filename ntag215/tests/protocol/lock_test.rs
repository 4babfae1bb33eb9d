use ntag215::PageIndex;
use ntag215::protocol::is_locked;
use ntag215::protocol::lock::DYNAMIC_PROTECTION_RANGES;

use crate::common::fixtures;

#[test]
fn every_dynamic_bit_locks_its_whole_range() {
    for (bit, range) in DYNAMIC_PROTECTION_RANGES.iter().enumerate() {
        let mut dump = fixtures::sample_dump();
        dump[520] = 1 << bit;
        let memory = ntag215::TagMemory::new(dump).unwrap();

        for page in 2..=255u8 {
            let locked = is_locked(PageIndex::new(page), false, &memory);
            assert_eq!(locked, range.contains(&page), "bit {bit} page {page}");
            assert!(!is_locked(PageIndex::new(page), true, &memory));
        }
    }
}

#[test]
fn static_and_dynamic_combine() {
    let mut dump = fixtures::sample_dump();
    dump[11] = 0b0000_0001; // page 8
    dump[520] = 0b0000_0010; // pages 32-47
    let memory = ntag215::TagMemory::new(dump).unwrap();

    assert!(is_locked(PageIndex::new(8), true, &memory));
    assert!(is_locked(PageIndex::new(8), false, &memory));
    assert!(is_locked(PageIndex::new(40), false, &memory));
    assert!(!is_locked(PageIndex::new(40), true, &memory));
    assert!(!is_locked(PageIndex::new(31), false, &memory));
}
