//! Payment substitution: practice points and gold standing in for units
//! and EP
//!
//! Ordering matters and is fixed: practice points cancel whole units before
//! any EP is computed, the gold-for-EP conversion then caps against the EP
//! figure that remains. Reward variants are applied by the caller after
//! both substitutions.

/// Gold pieces that buy one EP
pub const GOLD_PER_EP: u32 = 10;

/// Whole units (TE or LE) cancelled by practice points. One point cancels
/// one unit; points beyond the unit count are left untouched.
pub fn practice_points_used(offered: u32, units: u32) -> u32 {
    offered.min(units)
}

/// Outcome of converting offered gold into EP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoldConversion {
    /// EP cancelled by the conversion
    pub ep_cancelled: u32,
    /// Gold actually consumed, always `ep_cancelled * GOLD_PER_EP`
    pub gold_used: u32,
}

/// Convert offered gold into EP at 10:1, never cancelling more than half of
/// `ep` (integer division, so the cap rounds down). Gold that does not make
/// a full EP is not consumed.
pub fn gold_for_ep(gold_offered: u32, ep: u32) -> GoldConversion {
    let cap = ep / 2;
    let ep_cancelled = (gold_offered / GOLD_PER_EP).min(cap);
    GoldConversion {
        ep_cancelled,
        gold_used: ep_cancelled * GOLD_PER_EP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_practice_points_capped_at_unit_count() {
        assert_eq!(practice_points_used(3, 10), 3);
        assert_eq!(practice_points_used(10, 3), 3);
        assert_eq!(practice_points_used(0, 10), 0);
    }

    #[test]
    fn test_gold_conversion_respects_half_cap() {
        // 200 EP: cap is 100, 5000 gold could buy 500
        let conv = gold_for_ep(5000, 200);
        assert_eq!(conv.ep_cancelled, 100);
        assert_eq!(conv.gold_used, 1000);
    }

    #[test]
    fn test_gold_conversion_below_cap() {
        let conv = gold_for_ep(70, 200);
        assert_eq!(conv.ep_cancelled, 7);
        assert_eq!(conv.gold_used, 70);
    }

    #[test]
    fn test_partial_gold_not_consumed() {
        // 75 gold buys 7 EP; the leftover 5 stays with the character
        let conv = gold_for_ep(75, 200);
        assert_eq!(conv.ep_cancelled, 7);
        assert_eq!(conv.gold_used, 70);
    }

    #[test]
    fn test_odd_ep_cap_rounds_down() {
        let conv = gold_for_ep(1000, 15);
        assert_eq!(conv.ep_cancelled, 7);
        assert_eq!(conv.gold_used, 70);
    }

    #[test]
    fn test_zero_ep_converts_nothing() {
        let conv = gold_for_ep(1000, 0);
        assert_eq!(conv.ep_cancelled, 0);
        assert_eq!(conv.gold_used, 0);
    }
}
