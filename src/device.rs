use std::{
    fs::File,
    io::{Seek, Write},
    path::Path,
};

use crate::error::{Error, Result};

/// Writable, seekable store holding a disk image.
pub trait Image: Seek + Write {}

impl<T: Seek + Write> Image for T {}

fn open(path: &Path, write: bool) -> Result<File> {
    File::options()
        .create(false)
        .write(write)
        .truncate(false)
        .read(true)
        .open(path)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Opens an existing image for in-place modification. Never creates it.
pub fn open_image(path: &Path) -> Result<File> {
    open(path, true)
}

pub fn open_boot_program(path: &Path) -> Result<File> {
    open(path, false)
}
