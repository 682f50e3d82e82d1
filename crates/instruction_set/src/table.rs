use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{Error, Result};
use crate::exceptions::ExceptionTable;
use crate::parser::{parse_rows, Lines};

/// Opcodes of a single mnemonic, keyed by addressing mode label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpcodeMap(IndexMap<String, String>);

impl OpcodeMap {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn insert(&mut self, label: impl Into<String>, opcode: impl Into<String>) {
        self.0.insert(label.into(), opcode.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, o)| (l.as_str(), o.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, O: Into<String>> FromIterator<(L, O)> for OpcodeMap {
    fn from_iter<T: IntoIterator<Item = (L, O)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, opcode)| (label.into(), opcode.into()))
                .collect::<IndexMap<String, String>>(),
        )
    }
}

/// Mnemonics with a regular encoding, in the order they first appear in the instruction table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandardTable(IndexMap<String, OpcodeMap>);

impl StandardTable {
    pub fn get(&self, mnemonic: &str) -> Option<&OpcodeMap> {
        self.0.get(mnemonic)
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.0.contains_key(mnemonic)
    }

    pub fn mnemonics(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OpcodeMap)> {
        self.0.iter().map(|(m, o)| (m.as_str(), o))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, mnemonic: &str, opcodes: OpcodeMap) {
        // `IndexMap::insert` keeps the original position of an existing key.
        if self.0.insert(mnemonic.to_owned(), opcodes).is_some() {
            warn!("{} is listed more than once, the last entry wins", mnemonic);
        }
    }
}

/// Build the standard table from the instruction table `source`.
///
/// Rows whose mnemonic is in `exceptions` are dropped. Every other row maps its n-th opcode
/// column to `labels[n]`, skipping empty columns. A row with more opcode columns than there are
/// labels is an error, unless the surplus columns are all empty.
pub fn build_standard_table(
    source: &str,
    exceptions: &ExceptionTable,
    labels: &[String],
) -> Result<StandardTable> {
    let mut table = StandardTable::default();

    for row in parse_rows(&mut Lines::from_source(source)) {
        if exceptions.contains(row.mnemonic) {
            debug!("Skipping exception {} on line {}", row.mnemonic, row.line);
            continue;
        }

        let surplus = row.columns.get(labels.len()..).unwrap_or_default();
        if surplus.iter().any(|column| !column.is_empty()) {
            return Err(Error::TooManyColumns {
                line: row.line,
                mnemonic: row.mnemonic.to_owned(),
                columns: row.columns.len(),
                max: labels.len(),
            });
        }

        let opcodes = labels
            .iter()
            .zip(row.columns.iter())
            .filter(|(_, opcode)| !opcode.is_empty())
            .map(|(label, opcode)| (label.as_str(), *opcode))
            .collect();

        table.insert(row.mnemonic, opcodes);
    }

    Ok(table)
}
