//! Worksheet cell index
//!
//! The worksheet markup is scanned once with a pull parser and every `<c>`
//! element is recorded under its address, so resolving a cell is a map lookup
//! rather than a search through the document text.

use ahash::AHashMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use sheet_pluck_core::CellAddress;

/// The raw pieces of one `<c>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCell {
    /// `t` attribute (`s` for a shared-string pointer)
    pub cell_type: Option<String>,
    /// `s` attribute, the cell style index
    pub style: Option<usize>,
    /// Text of the `<v>` child; `None` when absent or empty
    pub value: Option<String>,
}

impl RawCell {
    /// Check whether the cell's value is a shared-string pointer
    pub fn is_shared_string(&self) -> bool {
        self.cell_type.as_deref() == Some("s")
    }
}

/// Address → cell lookup built from one worksheet part
#[derive(Debug, Clone, Default)]
pub struct SheetIndex {
    cells: AHashMap<String, RawCell>,
}

impl SheetIndex {
    /// Index every cell element in the worksheet markup
    ///
    /// When several cells share an address the first one wins and a warning
    /// is logged. Cells without an `r` attribute are skipped. Malformed markup
    /// ends the scan, keeping the cells indexed so far.
    pub fn parse(xml: &str) -> Self {
        let mut reader = Reader::from_str(xml);
        let mut cells: AHashMap<String, RawCell> = AHashMap::new();

        // Current cell state
        let mut current: Option<(Option<String>, RawCell)> = None;
        let mut in_value = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"c" => {
                        current = Some(read_cell_attrs(&e));
                        in_value = false;
                    }
                    b"v" if current.is_some() => {
                        in_value = true;
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"c" {
                        let (address, cell) = read_cell_attrs(&e);
                        insert_cell(&mut cells, address, cell);
                    }
                }
                Ok(Event::Text(e)) if in_value => {
                    if let Some((_, cell)) = current.as_mut() {
                        let text = match e.unescape() {
                            Ok(t) => t.into_owned(),
                            Err(_) => String::from_utf8_lossy(&e).into_owned(),
                        };
                        cell.value.get_or_insert_with(String::new).push_str(&text);
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"v" => in_value = false,
                    b"c" => {
                        if let Some((address, cell)) = current.take() {
                            insert_cell(&mut cells, address, cell);
                        }
                        in_value = false;
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    log::warn!(
                        "worksheet: malformed markup at byte {}, keeping {} indexed cells: {}",
                        reader.buffer_position(),
                        cells.len(),
                        e
                    );
                    break;
                }
                _ => {}
            }
        }

        log::debug!("worksheet: indexed {} cells", cells.len());
        Self { cells }
    }

    /// Look up a cell by address
    pub fn get(&self, address: &CellAddress) -> Option<&RawCell> {
        self.cells.get(&address.to_string())
    }

    /// Look up a cell by its A1 string as written in the worksheet
    pub fn get_a1(&self, address: &str) -> Option<&RawCell> {
        self.cells.get(address)
    }

    /// Number of indexed cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the worksheet has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn read_cell_attrs(e: &BytesStart<'_>) -> (Option<String>, RawCell) {
    let mut address = None;
    let mut cell = RawCell::default();

    for attr in e.attributes().flatten() {
        match attr.key.local_name().as_ref() {
            b"r" => {
                address = attr
                    .unescape_value()
                    .ok()
                    .map(|s| s.trim().to_ascii_uppercase());
            }
            b"t" => {
                cell.cell_type = attr.unescape_value().ok().map(|s| s.to_string());
            }
            b"s" => {
                let raw = attr.unescape_value().ok();
                cell.style = raw.as_deref().and_then(|s| s.trim().parse::<usize>().ok());
                if cell.style.is_none() {
                    log::warn!("worksheet: ignoring unparsable style index {:?}", raw);
                }
            }
            _ => {}
        }
    }

    (address, cell)
}

fn insert_cell(cells: &mut AHashMap<String, RawCell>, address: Option<String>, mut cell: RawCell) {
    let Some(address) = address else {
        return;
    };

    if cell.value.as_deref() == Some("") {
        cell.value = None;
    }

    if cells.contains_key(&address) {
        log::warn!(
            "worksheet: duplicate cell address {}, keeping the first occurrence",
            address
        );
        return;
    }

    cells.insert(address, cell);
}
