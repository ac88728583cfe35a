//! Armour line (factory method)
//!
//! Every armour creator reports durability the same way; creators differ only
//! in which piece they forge.

use kiln_core::{Creator, CreatorRegistry, ProductLine, Rendition, Result, VariantKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const LINE: &str = "armour";
pub const HELMET: &str = "helmet";
pub const PAULDRON: &str = "pauldron";

/// Durability of one armour piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durability {
    pub piece: String,
    pub current: u32,
    pub max: u32,
}

impl Durability {
    /// Durability of an undamaged piece
    pub fn full(piece: impl Into<String>, max: u32) -> Self {
        Self {
            piece: piece.into(),
            current: max,
            max,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.current) / f64::from(self.max)
    }
}

impl fmt::Display for Durability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} durability: {}/{}", self.piece, self.current, self.max)
    }
}

pub trait Armour {
    fn durability(&self) -> Durability;
}

pub struct Helmet;
pub struct Pauldron;

impl Armour for Helmet {
    fn durability(&self) -> Durability {
        Durability::full("Helmet", 300)
    }
}

impl Armour for Pauldron {
    fn durability(&self) -> Durability {
        Durability::full("Pauldron", 400)
    }
}

/// Outcome of the armour line's template operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurabilityReport {
    pub durability: Durability,
}

impl DurabilityReport {
    pub fn summary(&self) -> String {
        format!("Durability: {}", self.durability)
    }

    /// Rendition of this report, attributed to the creator key it came from
    pub fn rendition(&self, creator: impl Into<VariantKey>) -> Rendition {
        Rendition::new(creator, LINE, self.summary())
    }
}

/// Shared logic of every armour creator
pub struct ArmourLine;

impl ProductLine for ArmourLine {
    type Product = dyn Armour;
    type Output = DurabilityReport;

    fn operate(product: &Self::Product) -> DurabilityReport {
        DurabilityReport {
            durability: product.durability(),
        }
    }
}

pub struct HelmetCreator;

impl Creator for HelmetCreator {
    type Line = ArmourLine;

    fn factory_method(&self) -> Result<Box<dyn Armour>> {
        Ok(Box::new(Helmet))
    }
}

pub struct PauldronCreator;

impl Creator for PauldronCreator {
    type Line = ArmourLine;

    fn factory_method(&self) -> Result<Box<dyn Armour>> {
        Ok(Box::new(Pauldron))
    }
}

pub fn registry() -> Result<CreatorRegistry<ArmourLine>> {
    CreatorRegistry::new(LINE)
        .with(HELMET, || -> Arc<dyn Creator<Line = ArmourLine>> { Arc::new(HelmetCreator) })?
        .with(PAULDRON, || -> Arc<dyn Creator<Line = ArmourLine>> {
            Arc::new(PauldronCreator)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::TemplateOperation;

    /// A piece added after the line was written: only a creator is needed.
    struct Gauntlet;

    impl Armour for Gauntlet {
        fn durability(&self) -> Durability {
            Durability {
                piece: "Gauntlet".into(),
                current: 120,
                max: 150,
            }
        }
    }

    struct GauntletCreator;

    impl Creator for GauntletCreator {
        type Line = ArmourLine;

        fn factory_method(&self) -> Result<Box<dyn Armour>> {
            Ok(Box::new(Gauntlet))
        }
    }

    #[test]
    fn helmet_report() {
        let report = HelmetCreator.template_operation().unwrap();
        assert_eq!(report.durability, Durability::full("Helmet", 300));
        assert_eq!(report.summary(), "Durability: Helmet durability: 300/300");
    }

    #[test]
    fn resolved_pauldron_report() {
        let registry = registry().unwrap();
        let creator = registry.resolve_creator(PAULDRON).unwrap();
        let report = creator.template_operation().unwrap();
        assert_eq!(report.durability.max, 400);
    }

    #[test]
    fn new_creator_needs_no_line_changes() {
        let report = GauntletCreator.template_operation().unwrap();
        assert_eq!(report.durability.piece, "Gauntlet");
        assert!((report.durability.ratio() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn rendition_is_attributed_to_creator_key() {
        let report = GauntletCreator.template_operation().unwrap();
        let rendition = report.rendition("gauntlet-mk2");
        assert_eq!(rendition.variant, "gauntlet-mk2");
        assert_eq!(rendition.role, LINE);
        assert_eq!(rendition.detail, "Durability: Gauntlet durability: 120/150");
    }

    #[test]
    fn unknown_piece_fails_closed() {
        let registry = registry().unwrap();
        assert!(registry.resolve_creator("greaves").is_err());
    }
}
