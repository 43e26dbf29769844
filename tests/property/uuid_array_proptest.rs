//! Property-based tests for the UUID array codec

use proptest::prelude::*;
use uuid::Uuid;

use kanban_backend::shared::uuid_array::{RawValue, UuidArray};

fn uuids() -> impl Strategy<Value = Vec<Uuid>> {
    prop::collection::vec(any::<u128>().prop_map(Uuid::from_u128), 0..16)
}

proptest! {
    #[test]
    fn test_literal_roundtrip(ids in uuids()) {
        let array = UuidArray::from(ids.clone());
        let decoded: UuidArray = array.to_literal().parse().unwrap();
        prop_assert_eq!(decoded.into_inner(), ids);
    }

    #[test]
    fn test_bytes_match_text(ids in uuids()) {
        let literal = UuidArray::from(ids).to_literal();
        let from_text = UuidArray::from_raw(RawValue::Text(&literal)).unwrap();
        let from_bytes = UuidArray::from_raw(RawValue::Bytes(literal.as_bytes())).unwrap();
        prop_assert_eq!(from_text, from_bytes);
    }

    #[test]
    fn test_roundtrip_with_repeats(ids in uuids(), repeat in 1usize..4) {
        let repeated: Vec<Uuid> = ids.iter().copied().cycle().take(ids.len() * repeat).collect();
        let literal = UuidArray::from(repeated.clone()).to_literal();
        prop_assert_eq!(literal.parse::<UuidArray>().unwrap().into_inner(), repeated);
    }

    #[test]
    fn test_quoted_and_padded_elements(ids in uuids()) {
        let literal = format!(
            "{{{}}}",
            ids.iter().map(|id| format!(" \"{id}\" ")).collect::<Vec<_>>().join(",")
        );
        prop_assert_eq!(literal.parse::<UuidArray>().unwrap().into_inner(), ids);
    }

    #[test]
    fn test_literal_has_no_spaces(ids in uuids()) {
        let literal = UuidArray::from(ids).to_literal();
        prop_assert!(literal.starts_with('{') && literal.ends_with('}'), "literal not brace-delimited: {}", literal);
        prop_assert!(!literal.contains(' '));
    }
}
