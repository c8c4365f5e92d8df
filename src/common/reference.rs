//! Cell and range reference formatting for chart data formulas.

/// Convert column number to Excel column name (A, B, ..., Z, AA, AB, etc.)
///
/// Input is 1-based (1=A, 2=B, 26=Z, 27=AA, etc.)
pub fn column_index_to_name(mut col: u32) -> String {
    if col == 0 {
        return String::new(); // Invalid input
    }

    let mut name = String::new();

    while col > 0 {
        col -= 1; // Make 0-based for calculation
        let ch = (b'A' + (col % 26) as u8) as char;
        name.insert(0, ch);
        col /= 26;
    }

    name
}

/// Absolute cell reference such as `$B$7` from 1-based indices.
pub fn cell_reference_absolute(row: u32, col: u32) -> String {
    let mut buffer = itoa::Buffer::new();
    format!("${}${}", column_index_to_name(col), buffer.format(row))
}

/// Whether a sheet name must be wrapped in apostrophes inside a formula.
fn needs_quoting(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };

    if first.is_ascii_digit() {
        return true;
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        return true;
    }

    // Booleans are lexed before identifiers.
    if name.eq_ignore_ascii_case("TRUE") || name.eq_ignore_ascii_case("FALSE") {
        return true;
    }

    starts_like_a1_reference(name) || starts_like_r1c1_reference(name)
}

/// `AB12`, `A1B`: a valid A1 cell at the start is lexed as a cell even when
/// more characters follow.
fn starts_like_a1_reference(name: &str) -> bool {
    let letters = name.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    if !(1..=3).contains(&letters) {
        return false;
    }
    let column = name[..letters]
        .bytes()
        .fold(0u32, |acc, b| acc * 26 + u32::from(b.to_ascii_uppercase() - b'A' + 1));
    if column > 16_384 {
        return false;
    }

    let digits = &name[letters..];
    let digits = &digits[..digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len())];
    // Leading zeros do not make a row, `A0` is not a cell.
    !digits.is_empty() && digits.bytes().any(|b| b != b'0')
}

/// `R1C1`, `RC`, `R2C`, `R`, `C3`: R1C1-style references, either as a prefix
/// (`R`, optional row, `C`) or as the whole name (lone row or column).
fn starts_like_r1c1_reference(name: &str) -> bool {
    let bytes = name.as_bytes();
    let (head, tail) = match bytes.split_first() {
        Some((head, tail)) => (head.to_ascii_uppercase(), tail),
        None => return false,
    };

    let leading_digits = tail.iter().take_while(|b| b.is_ascii_digit()).count();
    let digits_are_valid =
        leading_digits == 0 || tail[..leading_digits].iter().any(|&b| b != b'0');

    match head {
        b'R' => {
            if !digits_are_valid {
                return false;
            }
            match tail.get(leading_digits) {
                None => true,
                Some(b) => b.eq_ignore_ascii_case(&b'C'),
            }
        },
        b'C' => digits_are_valid && leading_digits == tail.len(),
        _ => false,
    }
}

/// Quote a sheet name for use before `!` in a formula.
///
/// Names that are plain identifiers are returned unchanged; anything else is
/// wrapped in apostrophes with embedded apostrophes doubled.
pub fn quote_sheet_name(name: &str) -> String {
    if needs_quoting(name) {
        format!("'{}'", name.replace('\'', "''"))
    } else {
        name.to_string()
    }
}

/// Range formula such as `Sheet1!$A$1:$B$5`.
///
/// Indices are 1-based. The corners are normalized so the first reference is
/// always the top-left cell. An empty sheet name yields an unqualified range.
pub fn range_formula(
    sheet_name: &str,
    start_row: u32,
    start_col: u32,
    end_row: u32,
    end_col: u32,
) -> String {
    let top_left = cell_reference_absolute(start_row.min(end_row), start_col.min(end_col));
    let bottom_right = cell_reference_absolute(start_row.max(end_row), start_col.max(end_col));

    if sheet_name.is_empty() {
        format!("{}:{}", top_left, bottom_right)
    } else {
        format!(
            "{}!{}:{}",
            quote_sheet_name(sheet_name),
            top_left,
            bottom_right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_to_name() {
        assert_eq!(column_index_to_name(1), "A");
        assert_eq!(column_index_to_name(26), "Z");
        assert_eq!(column_index_to_name(27), "AA");
        assert_eq!(column_index_to_name(702), "ZZ");
        assert_eq!(column_index_to_name(16_384), "XFD");
        assert_eq!(column_index_to_name(0), "");
    }

    #[test]
    fn test_cell_reference_absolute() {
        assert_eq!(cell_reference_absolute(1, 1), "$A$1");
        assert_eq!(cell_reference_absolute(42, 28), "$AB$42");
    }

    #[test]
    fn test_quote_sheet_name() {
        assert_eq!(quote_sheet_name("Sheet1"), "Sheet1");
        assert_eq!(quote_sheet_name("Data_2024.v2"), "Data_2024.v2");
        assert_eq!(quote_sheet_name("My Sheet"), "'My Sheet'");
        assert_eq!(quote_sheet_name("Bob's Data"), "'Bob''s Data'");
        assert_eq!(quote_sheet_name("2024"), "'2024'");
        assert_eq!(quote_sheet_name("AB12"), "'AB12'");
        assert_eq!(quote_sheet_name("Summary-Q1"), "'Summary-Q1'");
    }

    #[test]
    fn test_quote_sheet_name_that_reads_as_a_token() {
        assert_eq!(quote_sheet_name("TRUE"), "'TRUE'");
        assert_eq!(quote_sheet_name("false"), "'false'");
        assert_eq!(quote_sheet_name("A1B"), "'A1B'");
        assert_eq!(quote_sheet_name("XFD1048576"), "'XFD1048576'");
        assert_eq!(quote_sheet_name("R1C1"), "'R1C1'");
        assert_eq!(quote_sheet_name("rc"), "'rc'");
        assert_eq!(quote_sheet_name("R"), "'R'");
        assert_eq!(quote_sheet_name("C12"), "'C12'");

        // Identifiers that merely resemble tokens stay bare.
        assert_eq!(quote_sheet_name("TRUEs"), "TRUEs");
        assert_eq!(quote_sheet_name("XFE1"), "XFE1");
        assert_eq!(quote_sheet_name("A0"), "A0");
        assert_eq!(quote_sheet_name("Report"), "Report");
        assert_eq!(quote_sheet_name("Chart"), "Chart");
        assert_eq!(quote_sheet_name("Sheet1"), "Sheet1");
    }

    #[test]
    fn test_range_formula_quotes_token_sheet_names() {
        assert_eq!(range_formula("TRUE", 1, 1, 2, 1), "'TRUE'!$A$1:$A$2");
        assert_eq!(range_formula("R1C1", 1, 1, 2, 1), "'R1C1'!$A$1:$A$2");
        assert_eq!(range_formula("A1B", 1, 1, 2, 1), "'A1B'!$A$1:$A$2");
    }

    #[test]
    fn test_range_formula() {
        assert_eq!(range_formula("Sheet1", 1, 1, 1, 1), "Sheet1!$A$1:$A$1");
        assert_eq!(range_formula("Sheet1", 2, 2, 10, 3), "Sheet1!$B$2:$C$10");
        assert_eq!(
            range_formula("Sales Data", 1, 2, 5, 2),
            "'Sales Data'!$B$1:$B$5"
        );
    }

    #[test]
    fn test_range_formula_normalizes_corners() {
        assert_eq!(range_formula("Sheet1", 10, 3, 2, 2), "Sheet1!$B$2:$C$10");
    }

    #[test]
    fn test_range_formula_without_sheet() {
        assert_eq!(range_formula("", 1, 1, 3, 1), "$A$1:$A$3");
    }
}
