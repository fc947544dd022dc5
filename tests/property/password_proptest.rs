//! Property-based tests for the password policies

use proptest::prelude::*;
use storefront_auth::backend::auth::PasswordPolicy;

const POLICIES: [PasswordPolicy; 2] = [PasswordPolicy::Signup, PasswordPolicy::Register];

fn assemble(letter: String, digit: String, symbol: String, filler: String) -> String {
    format!("{filler}{symbol}{letter}{digit}")
}

proptest! {
    #[test]
    fn short_passwords_rejected(password in "[A-Za-z0-9!@#$%^&*?]{0,7}") {
        for policy in POLICIES {
            prop_assert!(!policy.is_valid(&password));
        }
    }

    #[test]
    fn passwords_without_digit_rejected(password in "[A-Za-z!@#$%^&*?]{8,24}") {
        for policy in POLICIES {
            prop_assert!(!policy.is_valid(&password));
        }
    }

    #[test]
    fn passwords_without_letter_rejected(password in "[0-9!@#$%^&*?]{8,24}") {
        for policy in POLICIES {
            prop_assert!(!policy.is_valid(&password));
        }
    }

    #[test]
    fn passwords_without_symbol_rejected(password in "[A-Za-z0-9]{8,24}") {
        for policy in POLICIES {
            prop_assert!(!policy.is_valid(&password));
        }
    }

    #[test]
    fn signup_accepts_well_formed(
        letter in "[A-Za-z]",
        digit in "[0-9]",
        symbol in "[!@#$%^&*]",
        filler in "[A-Za-z0-9!@#$%^&*]{5,20}",
    ) {
        let password = assemble(letter, digit, symbol, filler);
        prop_assert!(PasswordPolicy::Signup.is_valid(&password));
    }

    #[test]
    fn register_accepts_well_formed(
        letter in "[A-Za-z]",
        digit in "[0-9]",
        symbol in "[@$!%*?&]",
        filler in "[A-Za-z0-9@$!%*?&]{5,20}",
    ) {
        let password = assemble(letter, digit, symbol, filler);
        prop_assert!(PasswordPolicy::Register.is_valid(&password));
    }

    #[test]
    fn foreign_character_rejected(
        valid in "[A-Za-z][0-9][!@&][A-Za-z0-9]{6,12}",
        foreign in "[ ~_.,;:()<>+=-]",
    ) {
        let password = format!("{valid}{foreign}");
        for policy in POLICIES {
            prop_assert!(!policy.is_valid(&password));
        }
    }
}
