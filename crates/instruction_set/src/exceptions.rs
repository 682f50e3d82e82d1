//! Mnemonics whose encoding doesn't fit the addressing mode table. Their data is loaded from a
//! side file and carried through to the generated document untouched.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{Error, Result};
use crate::table::OpcodeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExceptionTable(Map<String, Value>);

/// Typed view of an exception entry as the assembler consumes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialInstruction {
    pub operands: u32,
    pub addressing_modes: OpcodeMap,
}

impl ExceptionTable {
    /// Read and parse the exceptions file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;

        let table = Self::parse(&data, path)?;
        debug!("Loaded {} exceptions from {}", table.len(), path.display());

        Ok(table)
    }

    fn parse(data: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match serde_json::from_str::<Value>(data).map_err(|err| Error::json(path, err))? {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(Error::NotAnObject {
                path: path.to_owned(),
            }),
        }
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.0.contains_key(mnemonic)
    }

    pub fn get(&self, mnemonic: &str) -> Option<&Value> {
        self.0.get(mnemonic)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mnemonics in the order they appear in the source file.
    pub fn mnemonics(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Decode the entry for `mnemonic`, if there is one.
    pub fn special_info(&self, mnemonic: &str) -> Option<Result<SpecialInstruction>> {
        self.0.get(mnemonic).map(|value| {
            SpecialInstruction::deserialize(value).map_err(|source| Error::InvalidException {
                mnemonic: mnemonic.to_owned(),
                source,
            })
        })
    }
}

impl FromStr for ExceptionTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, "<memory>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AddressingMode;

    #[test]
    fn load_from_memory() {
        let table = ExceptionTable::from_str(r#"{"NOP": {"opcode": "01"}, "BRSET": 4}"#).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.contains("NOP"));
        assert!(table.contains("BRSET"));
        assert!(!table.contains("LDAA"));
        assert_eq!(table.get("BRSET"), Some(&Value::from(4)));
        assert_eq!(table.mnemonics().collect::<Vec<_>>(), vec!["NOP", "BRSET"]);
    }

    #[test]
    fn source_order_survives_serialization() {
        let source = r#"{"ZZZ":1,"AAA":{"b":2,"a":1},"MMM":[3]}"#;
        let table = ExceptionTable::from_str(source).unwrap();

        assert_eq!(serde_json::to_string(&table).unwrap(), source);
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            ExceptionTable::from_str("{\"NOP\": "),
            Err(Error::Json { .. })
        ));
    }

    #[test]
    fn root_must_be_an_object() {
        assert!(matches!(
            ExceptionTable::from_str("[\"NOP\"]"),
            Err(Error::NotAnObject { .. })
        ));
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("instruction_set_no_such_exceptions.json");
        assert!(matches!(
            ExceptionTable::load(&path),
            Err(Error::Io { path: p, .. }) if p == path
        ));
    }

    #[test]
    fn special_info() {
        let table = ExceptionTable::from_str(
            r#"{
                "BSET": {"operands": 2, "addressingModes": {"DIR": "14", "IND,X": "1C", "IND,Y": "181C"}},
                "NOP": {"opcode": "01"}
            }"#,
        )
        .unwrap();

        let bset = table.special_info("BSET").unwrap().unwrap();
        assert_eq!(bset.operands, 2);
        assert_eq!(bset.addressing_modes.get(AddressingMode::Direct.label()), Some("14"));
        assert_eq!(bset.addressing_modes.get("IND,Y"), Some("181C"));
        assert_eq!(bset.addressing_modes.get("EXT"), None);

        assert!(matches!(
            table.special_info("NOP"),
            Some(Err(Error::InvalidException { mnemonic, .. })) if mnemonic == "NOP"
        ));
        assert!(table.special_info("LDAA").is_none());
    }
}
