use std::{io, path::PathBuf};

use crate::layout::MAX_BOOT_PROGRAM_SZ;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("can't open `{}`", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("can't determine boot program size")]
    SizeQuery(#[source] io::Error),
    #[error("boot program is too large: {size} bytes (max {})", MAX_BOOT_PROGRAM_SZ)]
    Oversize { size: u64 },
    #[error("failed to allocate {size} bytes for the boot program")]
    Allocation {
        size: usize,
        #[source]
        source: std::collections::TryReserveError,
    },
    #[error("failed to read the boot program into memory")]
    Read(#[source] io::Error),
    #[error("error writing to image at offset {offset}")]
    Write {
        offset: u64,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
