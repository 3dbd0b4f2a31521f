//! Property tests for the substitution caps

use proptest::prelude::*;

use lernkosten::substitution::{gold_for_ep, practice_points_used, GOLD_PER_EP};

proptest! {
    /// Gold never cancels more than half the EP, so at least half survives.
    #[test]
    fn prop_gold_conversion_leaves_half(gold in 0u32..1_000_000, ep in 0u32..100_000) {
        let conv = gold_for_ep(gold, ep);
        prop_assert!(conv.ep_cancelled <= ep / 2);
        prop_assert!(ep - conv.ep_cancelled >= ep.div_ceil(2));
    }

    /// Consumed gold is always a whole multiple of the rate and never
    /// exceeds the offer.
    #[test]
    fn prop_gold_used_is_exact(gold in 0u32..1_000_000, ep in 0u32..100_000) {
        let conv = gold_for_ep(gold, ep);
        prop_assert_eq!(conv.gold_used, conv.ep_cancelled * GOLD_PER_EP);
        prop_assert!(conv.gold_used <= gold);
    }

    /// Practice points never drive the unit count negative.
    #[test]
    fn prop_practice_points_bounded(offered in 0u32..10_000, units in 0u32..10_000) {
        let used = practice_points_used(offered, units);
        prop_assert!(used <= units);
        prop_assert!(used <= offered);
    }
}
