// crates/segmenter-core/src/repr/text_norm.rs
//
// Fixed accent transliteration applied to every text cell before segmenting.
//
// Rules:
// - á é í ó ú ñ ü (and their upper-case forms) map to plain ASCII, case kept.
// - Every other char is left unchanged.
// - Targets are never sources, so one pass is final (idempotent).

use std::borrow::Cow;

use crate::table::{Cell, Table};

const TABLE: [(char, char); 14] = [
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('Á', 'A'),
    ('É', 'E'),
    ('Í', 'I'),
    ('Ó', 'O'),
    ('Ú', 'U'),
    ('ñ', 'n'),
    ('Ñ', 'N'),
    ('ü', 'u'),
    ('Ü', 'U'),
];

#[inline]
pub fn transliterate(c: char) -> char {
    TABLE
        .iter()
        .find_map(|&(from, to)| (from == c).then_some(to))
        .unwrap_or(c)
}

/// Borrows the input when nothing needs replacing.
pub fn normalize_text(s: &str) -> Cow<'_, str> {
    if s.is_ascii() || !s.chars().any(|c| transliterate(c) != c) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().map(transliterate).collect())
}

pub fn normalize_cell(cell: Cell) -> Cell {
    match cell {
        Cell::Text(s) => Cell::Text(normalize_owned(s)),
        other => other,
    }
}

fn normalize_owned(s: String) -> String {
    let replaced = match normalize_text(&s) {
        Cow::Owned(n) => Some(n),
        Cow::Borrowed(_) => None,
    };
    replaced.unwrap_or(s)
}

/// Same rows, same columns, same order; only text cells change.
pub fn normalize_table(mut table: Table) -> Table {
    for cell in table.cells_mut() {
        *cell = normalize_cell(std::mem::replace(cell, Cell::Empty));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_source_char() {
        assert_eq!(normalize_text("áéíóúÁÉÍÓÚñÑüÜ"), "aeiouAEIOUnNuU");
    }

    #[test]
    fn leaves_other_accents_alone() {
        // à, ç and ö are outside the fixed table.
        assert_eq!(normalize_text("àçö"), "àçö");
        assert!(matches!(normalize_text("Jose Rangel"), Cow::Borrowed(_)));
    }

    #[test]
    fn non_text_cells_pass_through() {
        assert_eq!(normalize_cell(Cell::Number(3.5)), Cell::Number(3.5));
        assert_eq!(normalize_cell(Cell::Empty), Cell::Empty);
        assert_eq!(
            normalize_cell(Cell::Text("Peña".into())),
            Cell::Text("Pena".into())
        );
    }

    #[test]
    fn table_rewrites_text_cells_in_place() {
        let t = Table::new(
            vec!["nombre".into(), "monto".into()],
            vec![
                vec!["Ñoño".into(), Cell::Number(1.0)],
                vec!["Ana".into(), Cell::Empty],
            ],
        )
        .unwrap();
        let n = normalize_table(t);
        assert_eq!(n.cell(0, 0), Some(&Cell::Text("Nono".into())));
        assert_eq!(n.cell(0, 1), Some(&Cell::Number(1.0)));
        assert_eq!(n.cell(1, 0), Some(&Cell::Text("Ana".into())));
        assert_eq!(n.cell(1, 1), Some(&Cell::Empty));
    }
}
