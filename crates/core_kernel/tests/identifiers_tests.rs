//! Unit tests for claim identifiers
//!
//! Tests cover creation, parsing, conversion, ordering, and serialization.

use core_kernel::ClaimId;
use std::collections::HashSet;
use uuid::Uuid;

mod creation {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let ids: HashSet<ClaimId> = (0..100).map(|_| ClaimId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_new_generates_time_ordered_ids() {
        let id1 = ClaimId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = ClaimId::new();
        assert!(id1 < id2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = ClaimId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(ClaimId::prefix(), "CLM");
    }

    #[test]
    fn test_display_format() {
        let uuid = Uuid::nil();
        let id = ClaimId::from_uuid(uuid);
        assert_eq!(id.to_string(), format!("CLM-{}", uuid));
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = ClaimId::new();
        let parsed: ClaimId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("CLM-not-a-uuid".parse::<ClaimId>().is_err());
        assert!("".parse::<ClaimId>().is_err());
    }
}

mod conversion {
    use super::*;

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id: ClaimId = uuid.into();
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_json_serialization_is_transparent() {
        let uuid = Uuid::new_v4();
        let id = ClaimId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));

        let deserialized: ClaimId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ordering_follows_uuid_ordering(a in any::<u128>(), b in any::<u128>()) {
            let (ua, ub) = (Uuid::from_u128(a), Uuid::from_u128(b));
            prop_assert_eq!(ClaimId::from_uuid(ua).cmp(&ClaimId::from_uuid(ub)), ua.cmp(&ub));
        }

        #[test]
        fn bare_uuid_text_parses(raw in any::<u128>()) {
            let uuid = Uuid::from_u128(raw);
            let parsed: ClaimId = uuid.to_string().parse().unwrap();
            prop_assert_eq!(parsed.as_uuid(), &uuid);
        }
    }
}
