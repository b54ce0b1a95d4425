//! Enemy variant modifiers.
//!
//! A variant is an optional elemental or trait modifier rolled onto a
//! generated enemy. Multiplicative modifiers floor-multiply HP/ATK/DEF/SPEED;
//! additive modifiers add to CRIT/SPEED. Variants apply after level scaling
//! and before the tier multiplier.

/// Whether a variant is an elemental affinity or a behavioral trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VariantKind {
    Elemental,
    Trait,
}

/// A named stat modifier applied to a generated enemy.
///
/// Multipliers are in percent (120 = ×1.2); a value of 100 is neutral.
/// Additive fields are flat stat points.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantModifier {
    pub name: String,
    pub kind: VariantKind,
    pub hp_mult_percent: u32,
    pub atk_mult_percent: u32,
    pub def_mult_percent: u32,
    pub speed_mult_percent: u32,
    pub crit_add: i64,
    pub speed_add: i64,
}

impl VariantModifier {
    /// A neutral modifier with the given name and kind.
    pub fn neutral(name: impl Into<String>, kind: VariantKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hp_mult_percent: 100,
            atk_mult_percent: 100,
            def_mult_percent: 100,
            speed_mult_percent: 100,
            crit_add: 0,
            speed_add: 0,
        }
    }
}

/// Catalog of variants the generator can roll from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantCatalog {
    variants: Vec<VariantModifier>,
}

impl VariantCatalog {
    pub fn new(variants: Vec<VariantModifier>) -> Self {
        Self { variants }
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn by_name(&self, name: &str) -> Option<&VariantModifier> {
        self.variants.iter().find(|v| v.name == name)
    }

    pub fn at(&self, index: usize) -> Option<&VariantModifier> {
        self.variants.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantModifier> {
        self.variants.iter()
    }
}
