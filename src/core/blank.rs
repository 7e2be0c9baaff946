use crate::models::Cell;

/// Placeholder tokens that count as "nothing entered".
const BLANK_TOKENS: [&str; 4] = ["nan", "none", "n/a", "-"];

/// True for empty cells, whitespace-only text and the placeholder tokens
/// (`nan`, `none`, `n/a`, `-`, any case).
///
/// Every presence decision goes through this predicate.
pub fn is_blank(cell: &Cell) -> bool {
    match cell {
        Cell::Empty => true,
        Cell::Number(n) => n.is_nan(),
        _ => is_blank_str(&cell.to_string()),
    }
}

pub fn is_blank_str(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || BLANK_TOKENS.iter().any(|t| v.eq_ignore_ascii_case(t))
}
