pub const GUARD_PREFIX: &str = "AUTOGEN_";

/// Include guard identifier for a generated header at `path`.
///
/// `/`, space, `-`, `(`, `)` and `.` become `_`, `+` becomes `P`. Only the
/// first character is uppercased; the rest keeps its case, so
/// `build/x.h++` gives `AUTOGEN_Build_x_hPP`.
pub fn header_guard(path: &str) -> String {
    let mut sanitized = path.chars().map(|c| match c {
        '/' | ' ' | '-' | '(' | ')' | '.' => '_',
        '+' => 'P',
        c => c,
    });

    let mut guard = String::with_capacity(GUARD_PREFIX.len() + path.len());
    guard.push_str(GUARD_PREFIX);
    if let Some(first) = sanitized.next() {
        guard.extend(first.to_uppercase());
    }
    guard.extend(sanitized);
    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_output_guard() {
        assert_eq!(
            header_guard("build/generated/crc32results.h++"),
            "AUTOGEN_Build_generated_crc32results_hPP"
        );
    }

    #[test]
    fn test_replacements() {
        assert_eq!(header_guard("a b-c(d)e.f+g/h"), "AUTOGEN_A_b_c_d_e_fPg_h");
        assert_eq!(header_guard("/abs/path.h"), "AUTOGEN__abs_path_h");
        assert_eq!(header_guard("+x"), "AUTOGEN_Px");
        assert_eq!(header_guard(""), "AUTOGEN_");
    }

    #[test]
    fn test_only_first_character_is_uppercased() {
        assert_eq!(header_guard("gen/MixedCase.H"), "AUTOGEN_Gen_MixedCase_H");
        assert_eq!(header_guard("Gen/lower.h"), "AUTOGEN_Gen_lower_h");
    }

    proptest! {
        #[test]
        fn guard_is_deterministic_identifier(path in "[a-zA-Z0-9_/ ().+-]{1,64}") {
            let guard = header_guard(&path);
            prop_assert_eq!(&guard, &header_guard(&path));
            prop_assert!(guard.starts_with(GUARD_PREFIX));
            prop_assert!(guard.len() > GUARD_PREFIX.len());
            prop_assert!(guard.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }
    }
}
