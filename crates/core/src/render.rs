//! Plain-text rendering shared by `Game` and `GameSnapshot`.
//!
//! ```text
//! Score: 16
//!  --------------------------------
//! |     4 |     8 |     0 |     0 |
//!  --------------------------------
//! ...
//! ```

use std::fmt::{self, Write};

use crate::types::CELL_WIDTH;

/// Columns taken by one cell: `"| "`, the value, and a trailing space.
const CELL_SPAN: usize = CELL_WIDTH + 3;

pub(crate) fn write_text(
    f: &mut impl Write,
    size: usize,
    tiles: &[u64],
    score: u64,
    over: bool,
) -> fmt::Result {
    let rule = "-".repeat(CELL_SPAN * size);

    if over {
        f.write_str("GAME OVER!\n")?;
    }
    writeln!(f, "Score: {score}")?;
    writeln!(f, " {rule}")?;
    for row in tiles.chunks(size.max(1)) {
        for value in row {
            write!(f, "| {value:>width$} ", width = CELL_WIDTH)?;
        }
        f.write_str("|\n")?;
        writeln!(f, " {rule}")?;
    }
    f.write_char('\n')
}
