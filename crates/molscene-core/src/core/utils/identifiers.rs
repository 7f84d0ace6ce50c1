/// Atom name of the alpha carbon, the one-per-residue representative atom.
pub const ALPHA_CARBON: &str = "CA";

const CARBON_ELEMENT: &str = "C";

pub fn is_carbon(element: &str) -> bool {
    element.trim().eq_ignore_ascii_case(CARBON_ELEMENT)
}

pub fn is_alpha_carbon(atom_name: &str) -> bool {
    atom_name.trim() == ALPHA_CARBON
}

/// Parses a residue id that must be a plain signed integer.
///
/// Insertion-coded ids such as `"12A"` yield `None`.
pub fn parse_residue_number(residue_id: &str) -> Option<i64> {
    residue_id.trim().parse().ok()
}

/// Reads the leading signed integer of a residue id, ignoring any insertion suffix.
pub fn leading_residue_number(residue_id: &str) -> Option<i64> {
    let trimmed = residue_id.trim();
    let digits_start = usize::from(trimmed.starts_with('-') || trimmed.starts_with('+'));
    let digits_len = trimmed[digits_start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..digits_start + digits_len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_carbon_ignores_case_and_whitespace() {
        assert!(is_carbon("C"));
        assert!(is_carbon(" c "));
        assert!(!is_carbon("CA"));
        assert!(!is_carbon("CL"));
        assert!(!is_carbon(""));
    }

    #[test]
    fn is_alpha_carbon_is_case_sensitive() {
        assert!(is_alpha_carbon("CA"));
        assert!(is_alpha_carbon(" CA "));
        assert!(!is_alpha_carbon("ca"));
        assert!(!is_alpha_carbon("CB"));
    }

    #[test]
    fn parse_residue_number_rejects_insertion_codes() {
        assert_eq!(parse_residue_number("12"), Some(12));
        assert_eq!(parse_residue_number("-4"), Some(-4));
        assert_eq!(parse_residue_number(" 7 "), Some(7));
        assert_eq!(parse_residue_number("12A"), None);
        assert_eq!(parse_residue_number(""), None);
    }

    #[test]
    fn leading_residue_number_tolerates_suffixes() {
        assert_eq!(leading_residue_number("12A"), Some(12));
        assert_eq!(leading_residue_number("-3B"), Some(-3));
        assert_eq!(leading_residue_number("100"), Some(100));
        assert_eq!(leading_residue_number("A12"), None);
        assert_eq!(leading_residue_number("-"), None);
    }
}
