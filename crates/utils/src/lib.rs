use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Creates a random alphanumeric string of the given length
pub fn create_random_secret(secret_len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}

/// Length of the code used to join a `ReminderGroup`
pub const JOIN_CODE_LENGTH: usize = 8;

pub fn create_join_code() -> String {
    create_random_secret(JOIN_CODE_LENGTH)
}

/// Placeholder phone number for customers created without any contact info.
/// Always `555` followed by seven digits.
pub fn create_placeholder_phone_number() -> String {
    let digits: u32 = thread_rng().gen_range(1_000_000..=9_999_999);
    format!("555{}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_has_requested_length_and_is_alphanumeric() {
        let secret = create_random_secret(16);
        assert_eq!(secret.len(), 16);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn join_codes_are_eight_chars() {
        for _ in 0..50 {
            let code = create_join_code();
            assert_eq!(code.len(), 8);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn placeholder_phone_numbers() {
        for _ in 0..50 {
            let phone = create_placeholder_phone_number();
            assert_eq!(phone.len(), 10);
            assert!(phone.starts_with("555"));
            assert!(phone.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
