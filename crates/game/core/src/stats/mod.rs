//! Hero stat resolution.
//!
//! Base attributes are the stored truth; everything combat sees is derived:
//!
//! ```text
//! AttributeSource ──resolve──▶ BaseAttributes ─┐
//! EquippedItem[]  ──fold────▶ EquipmentPower  ─┼─▶ ComputedStats
//! CompanionBonuses ────────────────────────────┤
//! PassiveBonuses ──────────────────────────────┘
//! ```

mod attributes;
mod computed;
mod equipment;

pub use attributes::{AttributeSource, BaseAttributes, LegacyStatsBlob};
pub use computed::{CompanionBonuses, ComputedStats, PassiveBonuses};
pub use equipment::{EquipmentPower, EquippedItem, SlotKind};
