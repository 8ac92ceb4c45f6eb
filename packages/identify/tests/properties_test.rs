//! Property tests for the classifier

use proptest::prelude::*;
use sight_identify::{identify, is_trimmable, HashType};

const CLAIMED_LENGTHS: [usize; 6] = [32, 40, 56, 64, 96, 128];

proptest! {
    #[test]
    fn identify_is_deterministic(input in any::<String>()) {
        prop_assert_eq!(identify(&input), identify(&input));
    }

    #[test]
    fn only_blank_input_yields_nothing(input in any::<String>()) {
        prop_assert_eq!(
            identify(&input).is_none(),
            input.trim_matches(is_trimmable).is_empty()
        );
    }

    #[test]
    fn whitespace_yields_nothing(input in "[ \t\r\n]{0,32}") {
        prop_assert!(identify(&input).is_none());
    }

    #[test]
    fn hex_rules_ignore_case(input in "[0-9a-f]{1,160}") {
        let lower = identify(&input).map(|r| r.hash_type());
        let upper = identify(&input.to_uppercase()).map(|r| r.hash_type());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn ntlm_never_fires(input in "[0-9a-fA-F]{32}") {
        let result = identify(&input).expect("hex input classifies");
        prop_assert_eq!(result.hash_type(), HashType::Md5);
    }

    #[test]
    fn unclaimed_hex_lengths(input in "[0-9a-f]{1,200}") {
        prop_assume!(!CLAIMED_LENGTHS.contains(&input.len()));
        let result = identify(&input).expect("hex input classifies");
        let expected = if input.len() % 4 == 0 {
            HashType::Base64
        } else {
            HashType::UnknownHex
        };
        prop_assert_eq!(result.hash_type(), expected);
        prop_assert_eq!(result.length(), input.len());
    }

    #[test]
    fn bcrypt_shape(cost in 0u8..100, tail in "[./A-Za-z0-9]{53}", version in "[aby]?") {
        let input = format!("$2{version}${cost:02}${tail}");
        let result = identify(&input).expect("bcrypt input classifies");
        prop_assert_eq!(result.hash_type(), HashType::Bcrypt);
        prop_assert_eq!(result.length(), input.len());
    }

    #[test]
    fn text_with_symbols_is_unknown(input in "[a-z]{1,20}[ !#%&*]{1,3}[a-z]{1,20}") {
        let result = identify(&input).expect("text classifies");
        prop_assert_eq!(result.hash_type(), HashType::Unknown);
    }
}
