use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Operand access scheme of an instruction. The declaration order is the order of the opcode
/// columns in the instruction table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum AddressingMode {
    Immediate,
    Direct,
    IndexedX,
    IndexedY,
    Extended,
    Inherent,
    Relative,
}

impl AddressingMode {
    pub const ALL: [AddressingMode; 7] = [
        AddressingMode::Immediate,
        AddressingMode::Direct,
        AddressingMode::IndexedX,
        AddressingMode::IndexedY,
        AddressingMode::Extended,
        AddressingMode::Inherent,
        AddressingMode::Relative,
    ];

    /// The label used for this mode in the generated document.
    pub fn label(self) -> &'static str {
        match self {
            AddressingMode::Immediate => "IMM",
            AddressingMode::Direct => "DIR",
            AddressingMode::IndexedX => "IND,X",
            AddressingMode::IndexedY => "IND,Y",
            AddressingMode::Extended => "EXT",
            AddressingMode::Inherent => "INH",
            AddressingMode::Relative => "REL",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AddressingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label() == s)
            .ok_or_else(|| Error::UnknownAddressingMode(s.to_owned()))
    }
}

/// Column labels in table order, as owned strings for [crate::Config].
pub fn default_labels() -> Vec<String> {
    AddressingMode::ALL
        .iter()
        .map(|mode| mode.label().to_owned())
        .collect()
}
