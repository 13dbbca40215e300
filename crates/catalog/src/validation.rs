//! Ordered validation pipeline for category fields.
//!
//! Rules run in a fixed order and the first violation wins:
//!
//! 1. description present
//! 2. description length
//! 3. name present and not blank
//! 4. name minimum length
//! 5. name maximum length
//!
//! Lengths are counted in Unicode scalar values (`char`s) of the raw input;
//! nothing is trimmed before counting. Blank detection uses [`str::trim`].

use crate::error::EntityValidationError;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Run the pipeline over proposed values, handing them back untouched on success.
///
/// `None` stands for a value the caller did not supply at all.
pub fn validate_fields<S: AsRef<str>>(
    name: Option<S>,
    description: Option<S>,
) -> Result<(S, S), EntityValidationError> {
    let description = description.ok_or(EntityValidationError::DescriptionNull)?;
    if char_len(description.as_ref()) > DESCRIPTION_MAX_LENGTH {
        return Err(EntityValidationError::DescriptionTooLong);
    }

    let name = name.ok_or(EntityValidationError::NameEmpty)?;
    let raw = name.as_ref();
    if raw.trim().is_empty() {
        return Err(EntityValidationError::NameEmpty);
    }
    let len = char_len(raw);
    if len < NAME_MIN_LENGTH {
        return Err(EntityValidationError::NameTooShort);
    }
    if len > NAME_MAX_LENGTH {
        return Err(EntityValidationError::NameTooLong);
    }

    Ok((name, description))
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_minimal_valid_fields() {
        let (name, description) = validate_fields(Some("abc"), Some("")).unwrap();
        assert_eq!(name, "abc");
        assert_eq!(description, "");
    }

    #[test]
    fn description_checks_run_before_name_checks() {
        assert_eq!(
            validate_fields(None, None),
            Err::<(&str, &str), _>(EntityValidationError::DescriptionNull)
        );

        let long = "d".repeat(DESCRIPTION_MAX_LENGTH + 1);
        assert_eq!(
            validate_fields(Some("a"), Some(long.as_str())),
            Err(EntityValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn blank_name_is_reported_as_empty_not_short() {
        for name in ["", " ", "  ", "\t\n"] {
            assert_eq!(
                validate_fields(Some(name), Some("ok")),
                Err(EntityValidationError::NameEmpty),
                "name {name:?}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_counts_towards_length() {
        // Two visible chars plus a space reach the minimum.
        assert!(validate_fields(Some(" ab"), Some("ok")).is_ok());
        assert_eq!(
            validate_fields(Some(" a"), Some("ok")),
            Err(EntityValidationError::NameTooShort)
        );
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let name = "é".repeat(NAME_MAX_LENGTH);
        assert!(name.len() > NAME_MAX_LENGTH);
        assert!(validate_fields(Some(name.as_str()), Some("ok")).is_ok());

        let description = "ü".repeat(DESCRIPTION_MAX_LENGTH);
        assert!(validate_fields(Some("abc"), Some(description.as_str())).is_ok());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        #[test]
        fn in_bounds_fields_are_accepted(
            name in "[a-zA-Z0-9][a-zA-Z0-9 ]{2,254}",
            description_len in 0usize..=DESCRIPTION_MAX_LENGTH,
        ) {
            let description = "d".repeat(description_len);
            prop_assert!(validate_fields(Some(name.as_str()), Some(description.as_str())).is_ok());
        }

        #[test]
        fn short_names_are_rejected(name in "[a-z0-9]{1,2}") {
            prop_assert_eq!(
                validate_fields(Some(name.as_str()), Some("ok")),
                Err(EntityValidationError::NameTooShort)
            );
        }

        #[test]
        fn long_names_are_rejected(len in (NAME_MAX_LENGTH + 1)..1_000usize) {
            let name = "n".repeat(len);
            prop_assert_eq!(
                validate_fields(Some(name.as_str()), Some("ok")),
                Err(EntityValidationError::NameTooLong)
            );
        }

        #[test]
        fn whitespace_only_names_are_rejected(name in "[ \t\r\n]{0,300}") {
            prop_assert_eq!(
                validate_fields(Some(name.as_str()), Some("ok")),
                Err(EntityValidationError::NameEmpty)
            );
        }

        /// Property: an over-long description is reported whatever the name is.
        #[test]
        fn long_description_wins_over_any_name(
            name in proptest::option::of(".{0,300}"),
            extra in 1usize..2_000,
        ) {
            let description = "d".repeat(DESCRIPTION_MAX_LENGTH + extra);
            prop_assert_eq!(
                validate_fields(name.as_deref(), Some(description.as_str())),
                Err(EntityValidationError::DescriptionTooLong)
            );
        }
    }
}
