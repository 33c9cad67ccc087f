//! Stats domain: the fixed schema of named passive stats.

use serde::{Deserialize, Serialize};

/// Generates `StatKind` together with its display names and lookup table.
macro_rules! stat_kinds {
    ($($variant:ident => $label:literal),* $(,)?) => {
        /// Every stat a passive node may grant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
        pub enum StatKind {
            $($variant),*
        }

        impl StatKind {
            pub const ALL: &'static [StatKind] = &[$(StatKind::$variant),*];

            /// Canonical key used in stat maps and summaries (e.g. "MaxLife").
            pub fn key(self) -> &'static str {
                match self {
                    $(StatKind::$variant => stringify!($variant)),*
                }
            }

            /// Human-readable label (e.g. "Maximum Life").
            pub fn label(self) -> &'static str {
                match self {
                    $(StatKind::$variant => $label),*
                }
            }
        }
    };
}

stat_kinds! {
    // Attributes
    Strength => "Strength",
    Dexterity => "Dexterity",
    Intelligence => "Intelligence",
    AllAttributes => "All Attributes",
    // Resources
    MaxLife => "Maximum Life",
    LifeRegeneration => "Life Regeneration",
    LifeLeech => "Life Leech",
    LifeOnHit => "Life on Hit",
    MaxMana => "Maximum Mana",
    ManaRegeneration => "Mana Regeneration",
    ManaLeech => "Mana Leech",
    ManaOnHit => "Mana on Hit",
    MaxEnergyShield => "Maximum Energy Shield",
    EnergyShieldRecharge => "Energy Shield Recharge",
    MaxStamina => "Maximum Stamina",
    StaminaRegeneration => "Stamina Regeneration",
    // Defence
    Armour => "Armour",
    Evasion => "Evasion",
    BlockChance => "Block Chance",
    SpellBlockChance => "Spell Block Chance",
    DodgeChance => "Dodge Chance",
    FireResistance => "Fire Resistance",
    ColdResistance => "Cold Resistance",
    LightningResistance => "Lightning Resistance",
    ChaosResistance => "Chaos Resistance",
    AllResistances => "All Elemental Resistances",
    MaxFireResistance => "Maximum Fire Resistance",
    MaxColdResistance => "Maximum Cold Resistance",
    MaxLightningResistance => "Maximum Lightning Resistance",
    PhysicalDamageReduction => "Physical Damage Reduction",
    StunThreshold => "Stun Threshold",
    GuardStrength => "Guard Strength",
    GuardRecovery => "Guard Recovery",
    // Offence
    PhysicalDamage => "Physical Damage",
    FireDamage => "Fire Damage",
    ColdDamage => "Cold Damage",
    LightningDamage => "Lightning Damage",
    ChaosDamage => "Chaos Damage",
    ElementalDamage => "Elemental Damage",
    SpellDamage => "Spell Damage",
    AttackDamage => "Attack Damage",
    MeleeDamage => "Melee Damage",
    ProjectileDamage => "Projectile Damage",
    AreaDamage => "Area Damage",
    DamageOverTime => "Damage over Time",
    AttackSpeed => "Attack Speed",
    CastSpeed => "Cast Speed",
    CriticalChance => "Critical Strike Chance",
    CriticalMultiplier => "Critical Strike Multiplier",
    Accuracy => "Accuracy",
    ArmourPenetration => "Armour Penetration",
    ElementalPenetration => "Elemental Penetration",
    BurnChance => "Chance to Burn",
    FreezeChance => "Chance to Freeze",
    ShockChance => "Chance to Shock",
    BleedChance => "Chance to Bleed",
    PoisonChance => "Chance to Poison",
    StunChance => "Chance to Stun",
    KnockbackChance => "Chance to Knock Back",
    StanceDamage => "Stance Damage",
    ParryWindow => "Parry Window",
    ThornsDamage => "Thorns Damage",
    // Utility
    MovementSpeed => "Movement Speed",
    CooldownReduction => "Cooldown Reduction",
    SkillDuration => "Skill Duration",
    AreaOfEffect => "Area of Effect",
    ProjectileSpeed => "Projectile Speed",
    ManaCostReduction => "Mana Cost Reduction",
    ItemRarity => "Item Rarity",
    ItemQuantity => "Item Quantity",
    ExperienceGain => "Experience Gain",
    GoldFind => "Gold Find",
    FlaskEffect => "Flask Effect",
    MinionDamage => "Minion Damage",
    MinionLife => "Minion Life",
    AuraEffect => "Aura Effect",
    CurseEffect => "Curse Effect",
}

impl StatKind {
    /// Resolves a stat name as authored in board files.
    ///
    /// Matching ignores case, spaces, underscores and dashes, and accepts
    /// either the canonical key ("MaxLife") or the label ("Maximum Life").
    pub fn from_name(name: &str) -> Option<StatKind> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        StatKind::ALL
            .iter()
            .copied()
            .find(|kind| normalize(kind.key()) == wanted || normalize(kind.label()) == wanted)
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
