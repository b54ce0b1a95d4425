//! Base attributes - the only permanently stored hero stats.
//!
//! The five attributes are the Single Source of Truth: every combat stat is
//! derived from them plus level and external contributions. They are mutated
//! only by level-up point allocation, never by the combat engine.

/// The five base attributes that define a hero.
///
/// - **STR** (Strength): attack power
/// - **AGI** (Agility): speed and dodge
/// - **END** (Endurance): HP pool and defense
/// - **INT** (Intellect): reserved for future skill scaling
/// - **LCK** (Luck): crit chance and loot luck
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseAttributes {
    pub strength: u32,
    pub agility: u32,
    pub endurance: u32,
    pub intellect: u32,
    pub luck: u32,
}

impl BaseAttributes {
    pub fn new(strength: u32, agility: u32, endurance: u32, intellect: u32, luck: u32) -> Self {
        Self {
            strength,
            agility,
            endurance,
            intellect,
            luck,
        }
    }
}

impl Default for BaseAttributes {
    /// Starting attributes for a fresh hero: all 5.
    fn default() -> Self {
        Self::new(5, 5, 5, 5, 5)
    }
}

/// Pre-migration stats blob kept on old player records.
///
/// Old records stored a free-form JSON object with `str`/`int`/`cha`/`luck`
/// keys instead of attribute columns. The mapping to the current attribute
/// set is fixed: AGI and LCK both read from `luck`, END reads from `cha`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegacyStatsBlob {
    pub str: Option<u32>,
    pub int: Option<u32>,
    pub cha: Option<u32>,
    pub luck: Option<u32>,
}

/// Where a hero's attributes come from.
///
/// Resolved exactly once at the data-access boundary; the stat resolver only
/// ever sees normalized [`BaseAttributes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeSource {
    /// Attribute columns are populated (current schema).
    Direct(BaseAttributes),
    /// Only the legacy stats blob exists.
    Legacy(LegacyStatsBlob),
}

impl AttributeSource {
    /// Attribute value used when a legacy field is missing.
    const LEGACY_DEFAULT: u32 = 5;

    /// Normalize to [`BaseAttributes`].
    pub fn resolve(self) -> BaseAttributes {
        match self {
            AttributeSource::Direct(attrs) => attrs,
            AttributeSource::Legacy(blob) => BaseAttributes {
                strength: blob.str.unwrap_or(Self::LEGACY_DEFAULT),
                agility: blob.luck.unwrap_or(Self::LEGACY_DEFAULT),
                endurance: blob.cha.unwrap_or(Self::LEGACY_DEFAULT),
                intellect: blob.int.unwrap_or(Self::LEGACY_DEFAULT),
                luck: blob.luck.unwrap_or(Self::LEGACY_DEFAULT),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_source_passes_through() {
        let attrs = BaseAttributes::new(20, 15, 18, 10, 12);
        assert_eq!(AttributeSource::Direct(attrs).resolve(), attrs);
    }

    #[test]
    fn legacy_source_maps_fields() {
        let blob = LegacyStatsBlob {
            str: Some(12),
            int: Some(8),
            cha: Some(9),
            luck: Some(7),
        };
        let attrs = AttributeSource::Legacy(blob).resolve();
        assert_eq!(attrs.strength, 12);
        assert_eq!(attrs.intellect, 8);
        assert_eq!(attrs.endurance, 9);
        // AGI and LCK both map from the legacy luck field
        assert_eq!(attrs.agility, 7);
        assert_eq!(attrs.luck, 7);
    }

    #[test]
    fn legacy_source_defaults_missing_fields() {
        let attrs = AttributeSource::Legacy(LegacyStatsBlob::default()).resolve();
        assert_eq!(attrs, BaseAttributes::default());
    }
}
