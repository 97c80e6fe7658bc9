//! Custom field validators shared by request DTOs.

use uuid::Uuid;
use validator::ValidationError;

/// Checks that a record key is a well-formed version-4 UUID string.
///
/// Used as a `validator` custom rule on the update and remove DTOs; the
/// error message is the one clients see.
pub fn validate_key_format(key: &str) -> Result<(), ValidationError> {
    match Uuid::try_parse(key) {
        Ok(parsed) if parsed.get_version_num() == 4 => Ok(()),
        _ => {
            let mut err = ValidationError::new("key");
            err.message = Some("Request must contain a valid key".into());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v4_uuid_is_accepted() {
        let key = Uuid::new_v4().to_string();
        assert!(validate_key_format(&key).is_ok());
    }

    #[test]
    fn test_non_uuid_is_rejected() {
        assert!(validate_key_format("not-a-key").is_err());
        assert!(validate_key_format("").is_err());
    }

    #[test]
    fn test_non_v4_uuid_is_rejected() {
        // Nil UUID parses but is not version 4.
        assert!(validate_key_format("00000000-0000-0000-0000-000000000000").is_err());
    }

    #[test]
    fn test_error_carries_contract_message() {
        let err = validate_key_format("nope").unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Request must contain a valid key")
        );
    }
}
