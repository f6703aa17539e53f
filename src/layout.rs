// References:
// [1] https://en.wikipedia.org/wiki/Master_boot_record#Sector_layout

use std::ops::Range;

pub const SEC_SZ: usize = 512;
pub const BOOT_CODE_SZ: usize = 446;
/// Largest boot program accepted, the real-mode 32 KiB convention.
pub const MAX_BOOT_PROGRAM_SZ: usize = 32 * 1024;

/// Partition table [446, 510) and boot signature [510, 512).
pub const RESERVED: Range<usize> = BOOT_CODE_SZ..SEC_SZ;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub image_offset: u64,
    pub source: Range<usize>, // into the boot program
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.source.len()
    }
}

/// Writes needed to install a boot program of `len` bytes.
///
/// The first `min(len, 446)` bytes land at offset 0. Everything from the
/// program's own offset 512 onwards lands at image offset 512, so program
/// bytes [446, 512) are never written. Empty writes are left out.
pub fn plan(len: usize) -> Vec<Chunk> {
    let mut writes = Vec::with_capacity(2);

    let first = len.min(BOOT_CODE_SZ);
    if first > 0 {
        writes.push(Chunk {
            image_offset: 0,
            source: 0..first,
        });
    }

    if len > SEC_SZ {
        writes.push(Chunk {
            image_offset: SEC_SZ as u64,
            source: SEC_SZ..len,
        });
    }

    writes
}

/// Program bytes that fall into [`RESERVED`] and get dropped.
pub fn discarded(len: usize) -> usize {
    len.clamp(BOOT_CODE_SZ, SEC_SZ) - BOOT_CODE_SZ
}
