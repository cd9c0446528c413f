//! Hit resolution shared by every attacker.

/// Defense points at which incoming damage is halved.
const DEFENSE_HALF_POINT: f64 = 50.0;

/// Damage dealt by a `raw_attack` hit against a defender.
///
/// Defense scales damage by `1 - defense / (defense + 50)`, so it never grants
/// full immunity. A blocking defender takes half of the reduced hit, rounded up.
/// Every hit lands for at least 1.
pub fn resolve_damage(raw_attack: u32, defender_defense: u32, defender_blocking: bool) -> u32 {
    let defense = f64::from(defender_defense);
    let multiplier = 1.0 - defense / (defense + DEFENSE_HALF_POINT);
    let mut damage = (f64::from(raw_attack) * multiplier).round() as u32;

    if defender_blocking {
        damage = damage.div_ceil(2);
    }

    damage.max(1)
}
