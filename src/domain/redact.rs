/// Masks an email for diagnostic logs.
///
/// The raw address must never reach a log sink; only this display form may.
/// Total and character-boundary safe: anything too short or not shaped like
/// `local@domain` collapses to `"***"`.
pub fn mask_email(email: &str) -> String {
    if email.chars().count() <= 3 {
        return "***".to_string();
    }

    let parts: Vec<&str> = email.split('@').collect();
    let [local, domain] = parts.as_slice() else {
        return "***".to_string();
    };

    let keep = if local.chars().count() <= 3 { 1 } else { 3 };
    let prefix: String = local.chars().take(keep).collect();
    format!("{prefix}***@{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_emails_are_fully_masked() {
        assert_eq!(mask_email(""), "***");
        assert_eq!(mask_email("ab"), "***");
        assert_eq!(mask_email("a@b"), "***");
    }

    #[test]
    fn test_malformed_emails_are_fully_masked() {
        assert_eq!(mask_email("no-separator.example.com"), "***");
        assert_eq!(mask_email("two@ats@example.com"), "***");
    }

    #[test]
    fn test_short_local_part_keeps_one_character() {
        assert_eq!(mask_email("ab@x.com"), "a***@x.com");
        assert_eq!(mask_email("abc@x.com"), "a***@x.com");
    }

    #[test]
    fn test_long_local_part_keeps_three_characters() {
        assert_eq!(mask_email("abcdef@domain.io"), "abc***@domain.io");
        assert_eq!(mask_email("ada.lovelace@example.com"), "ada***@example.com");
    }

    #[test]
    fn test_empty_local_part_never_panics() {
        assert_eq!(mask_email("@x.com"), "***@x.com");
    }
}
