use std::{
    io::{Read, Seek, SeekFrom},
    path::Path,
};

use log::debug;

use crate::{
    device,
    error::{Error, Result},
    layout::MAX_BOOT_PROGRAM_SZ,
};

/// A boot program held entirely in memory, at most 32 KiB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootProgram {
    bytes: Vec<u8>,
}

impl BootProgram {
    pub fn load(path: &Path) -> Result<Self> {
        let file = device::open_boot_program(path)?;
        let prog = Self::read_from(file)?;
        debug!("loaded {} bytes from `{}`", prog.len(), path.display());
        Ok(prog)
    }

    pub fn read_from<R: Read + Seek>(mut src: R) -> Result<Self> {
        let size = src.seek(SeekFrom::End(0)).map_err(Error::SizeQuery)?;
        src.seek(SeekFrom::Start(0)).map_err(Error::SizeQuery)?;

        if size > MAX_BOOT_PROGRAM_SZ as u64 {
            return Err(Error::Oversize { size });
        }
        let size = size as usize;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|source| Error::Allocation { size, source })?;
        bytes.resize(size, 0);
        src.read_exact(&mut bytes).map_err(Error::Read)?;

        Ok(BootProgram { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Write};

    use super::*;

    fn tmp_program(len: usize) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
        tmp.write_all(&data).unwrap();
        tmp
    }

    #[test]
    fn empty_program() {
        let prog = BootProgram::read_from(Cursor::new(Vec::new())).unwrap();
        assert_eq!(prog.len(), 0);
    }

    #[test]
    fn load_reads_whole_file() {
        let tmp = tmp_program(600);
        let prog = BootProgram::load(tmp.path()).unwrap();
        assert_eq!(prog.len(), 600);
        assert_eq!(prog.as_bytes()[599], (599 % 256) as u8);
    }

    #[test]
    fn max_size_accepted() {
        let tmp = tmp_program(MAX_BOOT_PROGRAM_SZ);
        let prog = BootProgram::load(tmp.path()).unwrap();
        assert_eq!(prog.len(), MAX_BOOT_PROGRAM_SZ);
    }

    #[test]
    fn oversize_rejected() {
        let tmp = tmp_program(MAX_BOOT_PROGRAM_SZ + 1);
        match BootProgram::load(tmp.path()) {
            Err(Error::Oversize { size }) => assert_eq!(size, 32769),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BootProgram::load(&dir.path().join("boot.bin")).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }

    #[test]
    fn source_is_not_modified() {
        let tmp = tmp_program(700);
        let before = std::fs::read(tmp.path()).unwrap();
        BootProgram::load(tmp.path()).unwrap();
        assert_eq!(std::fs::read(tmp.path()).unwrap(), before);
    }

    /// Claims a larger size than it can deliver.
    struct Truncated {
        inner: Cursor<Vec<u8>>,
        claimed: u64,
    }

    impl Read for Truncated {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl Seek for Truncated {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            match pos {
                SeekFrom::End(0) => Ok(self.claimed),
                pos => self.inner.seek(pos),
            }
        }
    }

    #[test]
    fn short_read() {
        let src = Truncated {
            inner: Cursor::new(vec![0u8; 100]),
            claimed: 200,
        };
        let err = BootProgram::read_from(src).unwrap_err();
        assert!(matches!(err, Error::Read(_)));
    }

    struct Unseekable;

    impl Read for Unseekable {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Ok(0)
        }
    }

    impl Seek for Unseekable {
        fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
            Err(io::Error::new(io::ErrorKind::Unsupported, "no seek"))
        }
    }

    #[test]
    fn size_query_failure() {
        let err = BootProgram::read_from(Unseekable).unwrap_err();
        assert!(matches!(err, Error::SizeQuery(_)));
    }
}
