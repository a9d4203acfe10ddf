//! Operation: generate a random lowercase identifier as wide as the terminal.

use console::Term;
use rand::Rng;

/// Width assumed when the terminal size cannot be determined.
pub const FALLBACK_COLUMNS: usize = 80;

/// Identifier length for a terminal `columns` wide: one less than the
/// width, so the line does not wrap, and never shorter than one character.
pub fn id_length(columns: usize) -> usize {
    columns.saturating_sub(1).max(1)
}

/// Parse a `COLUMNS`-style override. Zero and garbage are ignored.
pub fn parse_columns(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|&n: &usize| n > 0)
}

/// Width of the terminal attached to stdout.
///
/// `columns_override` (the `COLUMNS` variable) wins when it is a positive
/// number; otherwise the terminal is queried, falling back to
/// [`FALLBACK_COLUMNS`] when stdout is not a terminal.
pub fn terminal_columns(columns_override: Option<&str>) -> usize {
    if let Some(n) = columns_override.and_then(parse_columns) {
        return n;
    }
    match Term::stdout().size_checked() {
        Some((_rows, cols)) if cols > 0 => usize::from(cols),
        _ => FALLBACK_COLUMNS,
    }
}

/// Draw `len` characters uniformly from `a`..=`z`.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}
