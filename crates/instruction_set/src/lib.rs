//! Generator and reader for the instruction set document used by the assembler.
//!
//! The instruction table is a CSV file with one mnemonic per line followed by its opcode for
//! each addressing mode. Mnemonics that can't be described that way are listed in a separate
//! exceptions file and passed through to the output unchanged.

mod addressing;
mod config;
mod document;
mod errors;
mod exceptions;
mod parser;
mod table;

use tracing::info;

pub use addressing::{default_labels, AddressingMode};
pub use config::{Config, CONFIG_FILE_NAME};
pub use document::InstructionSet;
pub use errors::{Error, Result};
pub use exceptions::{ExceptionTable, SpecialInstruction};
pub use table::{build_standard_table, OpcodeMap, StandardTable};

/// Build the document from the input files named in `config`, without writing it.
pub fn build(config: &Config) -> Result<InstructionSet> {
    let exceptions = ExceptionTable::load(&config.exceptions)?;

    let path = &config.instruction_table;
    let source = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    let standard = build_standard_table(&source, &exceptions, &config.addressing_modes)?;

    Ok(InstructionSet::new(standard, exceptions))
}

/// Build the document and write it to `config.output`.
pub fn generate(config: &Config) -> Result<InstructionSet> {
    let instruction_set = build(config)?;

    instruction_set.write_to(&config.output, config.pretty)?;
    info!(
        "Wrote {} standard instructions and {} exceptions to {}",
        instruction_set.standard.len(),
        instruction_set.exceptions.len(),
        config.output.display()
    );

    Ok(instruction_set)
}
