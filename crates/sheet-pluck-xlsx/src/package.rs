//! Access to named parts of a packaged workbook
//!
//! Extraction needs only two operations from the container: "does this part
//! exist" and "read this part as text". [`PartSource`] captures exactly that,
//! so the zip archive can be swapped for parts the caller already holds.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::XlsxResult;

/// Shared string table part
pub const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";

/// Styles part
pub const STYLES_PART: &str = "xl/styles.xml";

/// Name of the worksheet part for a 1-based sheet index
pub fn worksheet_part(sheet_index: usize) -> String {
    format!("xl/worksheets/sheet{}.xml", sheet_index)
}

/// Read-only access to named text parts
pub trait PartSource {
    /// Check whether a part with this name exists
    fn has_part(&self, name: &str) -> bool;

    /// Read a part as UTF-8 text, or `None` if it does not exist
    fn read_part(&mut self, name: &str) -> XlsxResult<Option<String>>;
}

/// Parts served from a zip container
pub struct ZipPackage<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> ZipPackage<R> {
    /// Open a package from a reader
    pub fn new(reader: R) -> XlsxResult<Self> {
        Ok(Self {
            archive: ZipArchive::new(reader)?,
        })
    }
}

impl<'a> ZipPackage<Cursor<&'a [u8]>> {
    /// Open a package from raw file bytes
    pub fn from_bytes(bytes: &'a [u8]) -> XlsxResult<Self> {
        Self::new(Cursor::new(bytes))
    }
}

impl ZipPackage<BufReader<File>> {
    /// Open a package from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> XlsxResult<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> PartSource for ZipPackage<R> {
    fn has_part(&self, name: &str) -> bool {
        self.archive.file_names().any(|n| n == name)
    }

    fn read_part(&mut self, name: &str) -> XlsxResult<Option<String>> {
        let mut file = match self.archive.by_name(name) {
            Ok(f) => f,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut text = String::new();
        file.read_to_string(&mut text)?;
        Ok(Some(text))
    }
}

/// Parts held in memory, keyed by part name
#[derive(Debug, Clone, Default)]
pub struct MemoryPackage {
    parts: HashMap<String, String>,
}

impl MemoryPackage {
    /// Create an empty package
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a part
    pub fn insert<N: Into<String>, T: Into<String>>(&mut self, name: N, text: T) {
        self.parts.insert(name.into(), text.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_part<N: Into<String>, T: Into<String>>(mut self, name: N, text: T) -> Self {
        self.insert(name, text);
        self
    }
}

impl PartSource for MemoryPackage {
    fn has_part(&self, name: &str) -> bool {
        self.parts.contains_key(name)
    }

    fn read_part(&mut self, name: &str) -> XlsxResult<Option<String>> {
        Ok(self.parts.get(name).cloned())
    }
}
