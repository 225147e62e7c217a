//! Field validation rules for the registration form

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Message shown for empty required fields
pub const REQUIRED_MESSAGE: &str = "Campo obrigatório.";
pub const EMAIL_MESSAGE: &str = "Insira um Email válido.";
pub const PHONE_MESSAGE: &str = "Insira um Número válido com DD.";
pub const NATIONAL_ID_MESSAGE: &str = "Insira um CPF válido (somente números).";

/// Phone numbers must be strictly greater than this (10 digits, no area code)
pub const PHONE_MORE_THAN: u64 = 9_999_999_999;
/// CPF must be strictly greater than this
pub const NATIONAL_ID_MORE_THAN: u64 = 9_999_999_999;
/// CPF must be strictly less than this
pub const NATIONAL_ID_LESS_THAN: u64 = 99_999_999_999;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid regex");
}

/// A single field validation failure, carrying its display message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{message}")]
    Required { message: &'static str },
    #[error("{message}")]
    TypeMismatch { message: &'static str },
    #[error("{message}")]
    MoreThan { bound: u64, message: &'static str },
    #[error("{message}")]
    LessThan { bound: u64, message: &'static str },
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required { message }
            | FieldError::TypeMismatch { message }
            | FieldError::MoreThan { message, .. }
            | FieldError::LessThan { message, .. } => message,
        }
    }
}

fn required(raw: &str) -> Result<&str, FieldError> {
    if raw.is_empty() {
        Err(FieldError::Required {
            message: REQUIRED_MESSAGE,
        })
    } else {
        Ok(raw)
    }
}

/// Digits only; signs, separators and decimal points are a type mismatch
fn number(raw: &str, message: &'static str) -> Result<u64, FieldError> {
    let digits = required(raw)?.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::TypeMismatch { message });
    }
    digits
        .parse::<u64>()
        .map_err(|_| FieldError::TypeMismatch { message })
}

pub fn validate_name(raw: &str) -> Result<String, FieldError> {
    required(raw).map(str::to_string)
}

pub fn validate_email(raw: &str) -> Result<String, FieldError> {
    let value = required(raw)?;
    if EMAIL_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(FieldError::TypeMismatch {
            message: EMAIL_MESSAGE,
        })
    }
}

pub fn validate_phone(raw: &str) -> Result<u64, FieldError> {
    let value = number(raw, PHONE_MESSAGE)?;
    if value <= PHONE_MORE_THAN {
        return Err(FieldError::MoreThan {
            bound: PHONE_MORE_THAN,
            message: PHONE_MESSAGE,
        });
    }
    Ok(value)
}

pub fn validate_national_id(raw: &str) -> Result<u64, FieldError> {
    let value = number(raw, NATIONAL_ID_MESSAGE)?;
    if value <= NATIONAL_ID_MORE_THAN {
        return Err(FieldError::MoreThan {
            bound: NATIONAL_ID_MORE_THAN,
            message: NATIONAL_ID_MESSAGE,
        });
    }
    if value >= NATIONAL_ID_LESS_THAN {
        return Err(FieldError::LessThan {
            bound: NATIONAL_ID_LESS_THAN,
            message: NATIONAL_ID_MESSAGE,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name {
        use super::*;

        #[test]
        fn test_empty_is_required() {
            assert!(matches!(validate_name(""), Err(FieldError::Required { .. })));
        }

        #[test]
        fn test_any_text_is_accepted() {
            assert_eq!(validate_name("Ana").unwrap(), "Ana");
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_valid_email() {
            assert_eq!(validate_email("ana@x.com").unwrap(), "ana@x.com");
        }

        #[test]
        fn test_missing_at_sign() {
            let err = validate_email("ana.x.com").unwrap_err();
            assert_eq!(err.message(), EMAIL_MESSAGE);
        }

        #[test]
        fn test_missing_tld() {
            assert!(validate_email("ana@x").is_err());
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(
                validate_email(""),
                Err(FieldError::Required {
                    message: REQUIRED_MESSAGE
                })
            );
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_eleven_digits_accepted() {
            assert_eq!(validate_phone("11987654321").unwrap(), 11_987_654_321);
        }

        #[test]
        fn test_threshold_is_rejected() {
            let err = validate_phone("9999999999").unwrap_err();
            assert!(matches!(err, FieldError::MoreThan { bound, .. } if bound == PHONE_MORE_THAN));
            assert_eq!(err.message(), PHONE_MESSAGE);
        }

        #[test]
        fn test_short_numbers_rejected() {
            for raw in ["0", "123", "987654321", "1000000000"] {
                let err = validate_phone(raw).unwrap_err();
                assert_eq!(err.message(), PHONE_MESSAGE, "input {raw}");
            }
        }

        #[test]
        fn test_just_above_threshold_accepted() {
            assert!(validate_phone("10000000000").is_ok());
        }

        #[test]
        fn test_non_numeric_is_type_mismatch() {
            let err = validate_phone("(11) 98765-4321").unwrap_err();
            assert!(matches!(err, FieldError::TypeMismatch { .. }));
            assert_eq!(err.to_string(), PHONE_MESSAGE);
        }

        #[test]
        fn test_surrounding_whitespace_is_ignored() {
            assert!(validate_phone(" 11987654321 ").is_ok());
        }

        #[test]
        fn test_sign_and_decimal_are_type_mismatch() {
            for raw in ["+11987654321", "-11987654321", "11987654321.0", "1e11", "   "] {
                let err = validate_phone(raw).unwrap_err();
                assert!(matches!(err, FieldError::TypeMismatch { .. }), "input {raw:?}");
                assert_eq!(err.message(), PHONE_MESSAGE);
            }
        }

        #[test]
        fn test_overflow_is_type_mismatch() {
            let err = validate_phone("99999999999999999999999").unwrap_err();
            assert!(matches!(err, FieldError::TypeMismatch { .. }));
        }
    }

    mod national_id {
        use super::*;

        #[test]
        fn test_eleven_digits_accepted() {
            assert_eq!(validate_national_id("12345678901").unwrap(), 12_345_678_901);
        }

        #[test]
        fn test_lower_bound_is_exclusive() {
            let err = validate_national_id("9999999999").unwrap_err();
            assert!(matches!(err, FieldError::MoreThan { .. }));
            assert_eq!(err.message(), NATIONAL_ID_MESSAGE);
        }

        #[test]
        fn test_upper_bound_is_exclusive() {
            let err = validate_national_id("99999999999").unwrap_err();
            assert!(matches!(err, FieldError::LessThan { bound, .. } if bound == NATIONAL_ID_LESS_THAN));
            assert_eq!(err.message(), NATIONAL_ID_MESSAGE);
        }

        #[test]
        fn test_inside_bounds() {
            assert!(validate_national_id("10000000000").is_ok());
            assert!(validate_national_id("99999999998").is_ok());
        }

        #[test]
        fn test_far_outside_bounds() {
            assert!(validate_national_id("1").is_err());
            assert!(validate_national_id("123456789012").is_err());
        }

        #[test]
        fn test_letters_are_type_mismatch() {
            let err = validate_national_id("123.456.789-01").unwrap_err();
            assert!(matches!(err, FieldError::TypeMismatch { .. }));
        }

        #[test]
        fn test_leading_plus_is_type_mismatch() {
            let err = validate_national_id("+12345678901").unwrap_err();
            assert!(matches!(err, FieldError::TypeMismatch { .. }));
            assert_eq!(err.message(), NATIONAL_ID_MESSAGE);
        }
    }
}
