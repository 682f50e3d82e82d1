use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::addressing::AddressingMode;
use crate::errors::{Error, Result};
use crate::exceptions::ExceptionTable;
use crate::table::{OpcodeMap, StandardTable};

/// The generated document: the regular opcode table plus the exception data, copied as is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructionSet {
    pub standard: StandardTable,
    pub exceptions: ExceptionTable,
}

impl InstructionSet {
    pub fn new(standard: StandardTable, exceptions: ExceptionTable) -> Self {
        Self {
            standard,
            exceptions,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        serde_json::from_str(&data).map_err(|err| Error::json(path, err))
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
        .map_err(Error::Serialize)
    }

    /// Write the document to `path`, replacing whatever is there.
    pub fn write_to(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json(pretty)?;
        std::fs::write(path, json).map_err(|err| Error::io(path, err))
    }

    pub fn opcodes(&self, mnemonic: &str) -> Option<&OpcodeMap> {
        self.standard.get(mnemonic)
    }

    pub fn opcode(&self, mnemonic: &str, mode: AddressingMode) -> Option<&str> {
        self.opcodes(mnemonic)
            .and_then(|opcodes| opcodes.get(mode.label()))
    }

    pub fn is_exception(&self, mnemonic: &str) -> bool {
        self.exceptions.contains(mnemonic)
    }

    pub fn exception(&self, mnemonic: &str) -> Option<&Value> {
        self.exceptions.get(mnemonic)
    }

    /// Every known mnemonic, regular ones first.
    pub fn mnemonics(&self) -> impl Iterator<Item = &str> {
        self.standard.mnemonics().chain(self.exceptions.mnemonics())
    }
}

impl FromStr for InstructionSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|err| Error::json("<memory>", err))
    }
}
