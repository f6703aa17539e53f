use std::io::{self, Seek, SeekFrom, Write};

use log::{debug, warn};

use crate::{
    device::Image,
    error::{Error, Result},
    layout::{self, RESERVED},
    loader::BootProgram,
};

/// Installs `prog` into `image`, leaving the reserved MBR region alone.
///
/// Not transactional: if the second write fails the first one stays.
pub fn place(prog: &BootProgram, image: &mut dyn Image) -> Result<()> {
    let bytes = prog.as_bytes();

    let dropped = layout::discarded(bytes.len());
    if dropped > 0 {
        warn!(
            "{dropped} boot program bytes in {:?} are not installed",
            RESERVED
        );
    }

    let mut end = 0;
    for w in layout::plan(bytes.len()) {
        debug!(
            "writing {} bytes at image offset {} (program {:?})",
            w.len(),
            w.image_offset,
            w.source
        );
        let offset = w.image_offset;
        let wrap = |source: io::Error| Error::Write { offset, source };

        image.seek(SeekFrom::Start(offset)).map_err(wrap)?;
        image.write_all(&bytes[w.source.clone()]).map_err(wrap)?;
        end = offset + w.len() as u64;
    }

    image
        .flush()
        .map_err(|source| Error::Write { offset: end, source })
}
