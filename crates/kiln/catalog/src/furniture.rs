//! Furniture family
//!
//! Chair + Sofa + CoffeeTable, sold in Modern, Victorian and Art Deco. A
//! customer must never receive a Victorian sofa next to a modern chair, so
//! every piece of one order comes from a single [`FurnitureFactory`].

use kiln_core::{FactoryRegistry, FamilyFactory, Rendition, Result, VariantKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const FAMILY: &str = "furniture";

/// Furniture variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnitureStyle {
    Modern,
    Victorian,
    ArtDeco,
}

impl FurnitureStyle {
    pub const ALL: [FurnitureStyle; 3] = [Self::Modern, Self::Victorian, Self::ArtDeco];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Victorian => "victorian",
            Self::ArtDeco => "art-deco",
        }
    }
}

impl fmt::Display for FurnitureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FurnitureStyle {
    type Err = kiln_core::CreationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.key() == s)
            .ok_or_else(|| kiln_core::CreationError::unknown(FAMILY, s))
    }
}

impl From<FurnitureStyle> for VariantKey {
    fn from(style: FurnitureStyle) -> Self {
        VariantKey::from(style.key())
    }
}

pub trait Chair {
    fn legs(&self) -> u8;
    fn sit_on(&self) -> Rendition;
}

pub trait Sofa {
    fn seats(&self) -> u8;
    fn lie_on(&self) -> Rendition;
}

pub trait CoffeeTable {
    fn place(&self, items: &[&str]) -> Rendition;
}

/// Factory capability of the furniture family
pub trait FurnitureFactory: FamilyFactory {
    fn create_chair(&self) -> Box<dyn Chair>;
    fn create_sofa(&self) -> Box<dyn Sofa>;
    fn create_coffee_table(&self) -> Box<dyn CoffeeTable>;
}

// -- Modern -----------------------------------------------------------------

pub struct ModernChair;
pub struct ModernSofa;
pub struct ModernCoffeeTable;

impl Chair for ModernChair {
    fn legs(&self) -> u8 {
        1
    }

    fn sit_on(&self) -> Rendition {
        Rendition::new(FurnitureStyle::Modern, "chair", "sitting on a pedestal chair")
    }
}

impl Sofa for ModernSofa {
    fn seats(&self) -> u8 {
        3
    }

    fn lie_on(&self) -> Rendition {
        Rendition::new(FurnitureStyle::Modern, "sofa", "lying on a low modular sofa")
    }
}

impl CoffeeTable for ModernCoffeeTable {
    fn place(&self, items: &[&str]) -> Rendition {
        Rendition::new(
            FurnitureStyle::Modern,
            "coffee-table",
            format!("placed {} on a glass slab table", items.join(", ")),
        )
    }
}

/// Builds modern furniture only
pub struct ModernFurniture;

impl FamilyFactory for ModernFurniture {
    fn variant(&self) -> VariantKey {
        FurnitureStyle::Modern.into()
    }
}

impl FurnitureFactory for ModernFurniture {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ModernSofa)
    }

    fn create_coffee_table(&self) -> Box<dyn CoffeeTable> {
        Box::new(ModernCoffeeTable)
    }
}

// -- Victorian --------------------------------------------------------------

pub struct VictorianChair;
pub struct VictorianSofa;
pub struct VictorianCoffeeTable;

impl Chair for VictorianChair {
    fn legs(&self) -> u8 {
        4
    }

    fn sit_on(&self) -> Rendition {
        Rendition::new(FurnitureStyle::Victorian, "chair", "sitting on a carved walnut chair")
    }
}

impl Sofa for VictorianSofa {
    fn seats(&self) -> u8 {
        2
    }

    fn lie_on(&self) -> Rendition {
        Rendition::new(FurnitureStyle::Victorian, "sofa", "lying on a tufted chesterfield")
    }
}

impl CoffeeTable for VictorianCoffeeTable {
    fn place(&self, items: &[&str]) -> Rendition {
        Rendition::new(
            FurnitureStyle::Victorian,
            "coffee-table",
            format!("placed {} on a marble-topped table", items.join(", ")),
        )
    }
}

/// Builds Victorian furniture only
pub struct VictorianFurniture;

impl FamilyFactory for VictorianFurniture {
    fn variant(&self) -> VariantKey {
        FurnitureStyle::Victorian.into()
    }
}

impl FurnitureFactory for VictorianFurniture {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(VictorianChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(VictorianSofa)
    }

    fn create_coffee_table(&self) -> Box<dyn CoffeeTable> {
        Box::new(VictorianCoffeeTable)
    }
}

// -- Art Deco ---------------------------------------------------------------

pub struct ArtDecoChair;
pub struct ArtDecoSofa;
pub struct ArtDecoCoffeeTable;

impl Chair for ArtDecoChair {
    fn legs(&self) -> u8 {
        4
    }

    fn sit_on(&self) -> Rendition {
        Rendition::new(FurnitureStyle::ArtDeco, "chair", "sitting on a lacquered club chair")
    }
}

impl Sofa for ArtDecoSofa {
    fn seats(&self) -> u8 {
        3
    }

    fn lie_on(&self) -> Rendition {
        Rendition::new(FurnitureStyle::ArtDeco, "sofa", "lying on a curved velvet sofa")
    }
}

impl CoffeeTable for ArtDecoCoffeeTable {
    fn place(&self, items: &[&str]) -> Rendition {
        Rendition::new(
            FurnitureStyle::ArtDeco,
            "coffee-table",
            format!("placed {} on a mirrored stepped table", items.join(", ")),
        )
    }
}

/// Builds Art Deco furniture only
pub struct ArtDecoFurniture;

impl FamilyFactory for ArtDecoFurniture {
    fn variant(&self) -> VariantKey {
        FurnitureStyle::ArtDeco.into()
    }
}

impl FurnitureFactory for ArtDecoFurniture {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ArtDecoChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ArtDecoSofa)
    }

    fn create_coffee_table(&self) -> Box<dyn CoffeeTable> {
        Box::new(ArtDecoCoffeeTable)
    }
}

/// Registry with every furniture style registered
pub fn registry() -> Result<FactoryRegistry<dyn FurnitureFactory>> {
    let registry: FactoryRegistry<dyn FurnitureFactory> = FactoryRegistry::new(FAMILY);
    registry.register(FurnitureStyle::Modern, || -> Arc<dyn FurnitureFactory> {
        Arc::new(ModernFurniture)
    })?;
    registry.register(FurnitureStyle::Victorian, || -> Arc<dyn FurnitureFactory> {
        Arc::new(VictorianFurniture)
    })?;
    registry.register(FurnitureStyle::ArtDeco, || -> Arc<dyn FurnitureFactory> {
        Arc::new(ArtDecoFurniture)
    })?;
    Ok(registry)
}

/// Furnish a living room from one factory
pub fn furnish(factory: &dyn FurnitureFactory) -> Vec<Rendition> {
    vec![
        factory.create_chair().sit_on(),
        factory.create_sofa().lie_on(),
        factory.create_coffee_table().place(&["tea", "magazines"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::ensure_consistent;

    #[test]
    fn every_style_furnishes_consistently() {
        let registry = registry().unwrap();
        for style in FurnitureStyle::ALL {
            let factory = registry.resolve_factory(style.key()).unwrap();
            let room = furnish(factory.as_ref());
            assert_eq!(room.len(), 3);
            assert_eq!(ensure_consistent(&room).unwrap(), style.key());
        }
    }

    #[test]
    fn roles_are_reported() {
        let room = furnish(&VictorianFurniture);
        let roles: Vec<&str> = room.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["chair", "sofa", "coffee-table"]);
        assert!(room[2].detail.contains("tea, magazines"));
    }

    #[test]
    fn product_shape_differs_by_style() {
        assert_eq!(ModernFurniture.create_chair().legs(), 1);
        assert_eq!(VictorianFurniture.create_chair().legs(), 4);
        assert_eq!(VictorianFurniture.create_sofa().seats(), 2);
    }

    #[test]
    fn style_parsing_is_exact() {
        assert_eq!("art-deco".parse::<FurnitureStyle>().unwrap(), FurnitureStyle::ArtDeco);
        assert!("ArtDeco".parse::<FurnitureStyle>().is_err());
        assert!("baroque".parse::<FurnitureStyle>().is_err());
    }

    #[test]
    fn unknown_style_fails_closed() {
        let registry = registry().unwrap();
        assert!(registry.resolve_factory("baroque").is_err());
    }
}
