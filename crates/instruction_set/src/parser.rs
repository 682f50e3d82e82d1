//! Line oriented reader for the instruction table.
//!
//! Each line is `MNEMONIC,opcode,opcode,...`. There is no header and no quoting, so a comma
//! inside a field can't be expressed.

pub struct Lines<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Lines<'a> {
    pub fn from_source(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            pos: 0,
        }
    }

    fn current(&self) -> &'a str {
        self.lines[self.pos]
    }

    fn next(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// 1 based line number of the current line.
    fn line_number(&self) -> usize {
        self.pos + 1
    }
}

#[derive(Debug, PartialEq)]
pub struct Row<'a> {
    pub line: usize,
    pub mnemonic: &'a str,
    /// Opcode columns following the mnemonic. Empty strings are kept so positions line up with
    /// the addressing modes.
    pub columns: Vec<&'a str>,
}

fn parse_row(line: usize, input: &str) -> Row<'_> {
    // LDAA,86,96,A6,18A6,B6,,
    let mut fields = input.trim().split(',');

    // `split` always yields at least one item.
    let mnemonic = fields.next().unwrap_or_default();

    Row {
        line,
        mnemonic,
        columns: fields.collect(),
    }
}

pub fn parse_rows<'a>(lines: &mut Lines<'a>) -> Vec<Row<'a>> {
    let mut rows = vec![];

    while !lines.at_end() {
        // Blank lines become rows with an empty mnemonic.
        rows.push(parse_row(lines.line_number(), lines.current()));
        lines.next();
    }

    rows
}
