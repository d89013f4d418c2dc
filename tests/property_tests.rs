//! tests/property_tests.rs
//! Property-based checks of the transform engine

use proptest::prelude::*;
use vigenere_rs::utils::fold_case;
use vigenere_rs::{decrypt, encrypt, Key, KeyPolicy};

/// Keys of 1–16 ASCII letters in either case.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,16}"
}

/// Arbitrary printable text, including non-ASCII.
fn message_strategy() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Text without letters or anything that has a case.
fn non_letter_strategy() -> impl Strategy<Value = String> {
    "[\\p{Nd}\\p{P}\\p{Zs}\t\n$%^+=<>|~`]{0,64}"
}

/// Letters from several cased scripts, mixed with digits and punctuation.
/// Every letter here has one-character upper and lower forms.
fn cased_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?À-ÖØ-Þà-öø-þΑ-Ωα-ρσ-ωА-я]{0,64}"
}

fn lowercased(message: &str) -> String {
    message.chars().map(fold_case).collect()
}

proptest! {
    /// Property: decrypt(encrypt(m)) is m lowercased.
    #[test]
    fn prop_roundtrip(message in message_strategy(), key in key_strategy()) {
        let encrypted = encrypt(&message, &key).unwrap();
        let decrypted = decrypt(&encrypted, &key).unwrap();
        prop_assert_eq!(decrypted, lowercased(&message));
    }

    /// Property: letter case never changes the ciphertext, in any script.
    #[test]
    fn prop_case_collapse(
        message in cased_text_strategy(),
        flips in prop::collection::vec(any::<bool>(), 64),
        key in key_strategy(),
    ) {
        let lower: String = message.chars().flat_map(char::to_lowercase).collect();
        let upper: String = message.chars().flat_map(char::to_uppercase).collect();
        let mixed: String = message
            .chars()
            .zip(flips.iter())
            .flat_map(|(c, &up)| -> Vec<char> {
                if up { c.to_uppercase().collect() } else { c.to_lowercase().collect() }
            })
            .collect();

        let expected = encrypt(&lower, &key).unwrap();
        prop_assert_eq!(encrypt(&upper, &key).unwrap(), expected.clone());
        prop_assert_eq!(encrypt(&mixed, &key).unwrap(), expected);
    }

    /// Property: text with no letters is returned unchanged.
    #[test]
    fn prop_non_letter_identity(message in non_letter_strategy(), key in key_strategy()) {
        prop_assert_eq!(encrypt(&message, &key).unwrap(), message);
    }

    /// Property: output has the same number of characters.
    #[test]
    fn prop_length_preserved(message in message_strategy(), key in key_strategy()) {
        let encrypted = encrypt(&message, &key).unwrap();
        prop_assert_eq!(encrypted.chars().count(), message.chars().count());
    }

    /// Property: inserting non-letters never shifts the key schedule.
    #[test]
    fn prop_non_letters_do_not_advance_key(
        letters in "[a-z]{0,48}",
        noise in prop::collection::vec("[0-9 .,!?-]{0,3}", 48),
        trailing in "[0-9 .,!?-]{0,3}",
        key in key_strategy(),
    ) {
        let mut noisy: String = letters
            .chars()
            .zip(noise.iter())
            .flat_map(|(c, n)| n.chars().chain(std::iter::once(c)))
            .collect();
        noisy.push_str(&trailing);

        let clean = encrypt(&letters, &key).unwrap();
        let extracted: String = encrypt(&noisy, &key)
            .unwrap()
            .chars()
            .filter(char::is_ascii_lowercase)
            .collect();

        prop_assert_eq!(extracted, clean);
    }

    /// Property: sanitizing a valid key is a no-op.
    #[test]
    fn prop_sanitize_agrees_on_clean_keys(key in key_strategy()) {
        prop_assert_eq!(
            Key::parse(&key, KeyPolicy::Sanitize).unwrap(),
            Key::parse(&key, KeyPolicy::Reject).unwrap()
        );
    }
}

#[test]
fn empty_message_with_any_key() {
    for key in ["a", "key", "ZZZ", "vigenere"] {
        assert_eq!(encrypt("", key).unwrap(), "");
    }
}
