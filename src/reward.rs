//! Reward variants: the game master's discount pass
//!
//! Applied strictly last, after practice points and gold-for-EP have been
//! settled. A variant that does not apply to the request's action/kind
//! combination leaves the values untouched instead of erroring; the
//! frontend offers only the applicable variants, but a stray one must not
//! corrupt a calculation.

use crate::core::types::{ActionKind, EntityKind, RewardVariant};

/// Flat gold price of learning a spell from a scroll
pub const SPRUCHROLLE_GOLD: u32 = 20;

/// Apply `variant` to the substituted (ep, gold) pair.
pub fn apply(
    variant: RewardVariant,
    action: ActionKind,
    kind: EntityKind,
    ep: u32,
    gold: u32,
) -> (u32, u32) {
    match variant {
        RewardVariant::Default => (ep, gold),
        // Gold waiver is a skill-learning reward only
        RewardVariant::NoGold => {
            if action == ActionKind::Learn && kind != EntityKind::Spell {
                (ep, 0)
            } else {
                (ep, gold)
            }
        }
        RewardVariant::HalveEp => (ep / 2, gold),
        RewardVariant::HalveEpNoGold => (ep / 2, 0),
        // A scroll only helps with learning a spell
        RewardVariant::Spruchrolle => {
            if action == ActionKind::Learn && kind == EntityKind::Spell {
                (ep / 3, SPRUCHROLLE_GOLD)
            } else {
                (ep, gold)
            }
        }
    }
}
