//! Property tests for secret name filtering.

use orbital::platform::filter_secrets;
use orbital::types::Secret;
use proptest::prelude::*;

fn secret_strategy() -> impl Strategy<Value = Secret> {
    ("[A-Za-z0-9_.]{0,12}", "[ -~]{0,12}").prop_map(|(name, value)| Secret { name, value })
}

proptest! {
    #[test]
    fn filter_is_idempotent(raw in prop::collection::vec(secret_strategy(), 0..32)) {
        let once = filter_secrets(raw);
        let twice = filter_secrets(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_keeps_exactly_undotted_names_in_order(
        raw in prop::collection::vec(secret_strategy(), 0..32)
    ) {
        let expected: Vec<Secret> = raw
            .iter()
            .filter(|s| !s.name.contains('.'))
            .cloned()
            .collect();
        prop_assert_eq!(filter_secrets(raw), expected);
    }

    #[test]
    fn filter_output_never_contains_separator(
        raw in prop::collection::vec(secret_strategy(), 0..32)
    ) {
        for secret in filter_secrets(raw) {
            prop_assert!(!secret.name.contains('.'));
        }
    }
}
