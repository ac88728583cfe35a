//! Vehicle family: an SUV and a sedan per paint finish

use kiln_core::{FactoryRegistry, FamilyFactory, Rendition, Result, VariantKey};
use std::sync::Arc;

pub const FAMILY: &str = "vehicles";
pub const WHITE: &str = "white";
pub const DARK: &str = "dark";

pub trait Suv {
    fn drive(&self) -> Rendition;
}

pub trait Sedan {
    fn drive(&self) -> Rendition;
}

pub trait VehicleFactory: FamilyFactory {
    fn create_suv(&self) -> Box<dyn Suv>;
    fn create_sedan(&self) -> Box<dyn Sedan>;
}

pub struct WhiteSuv;
pub struct WhiteSedan;
pub struct DarkSuv;
pub struct DarkSedan;

impl Suv for WhiteSuv {
    fn drive(&self) -> Rendition {
        Rendition::new(WHITE, "suv", "Riding a white SUV")
    }
}

impl Sedan for WhiteSedan {
    fn drive(&self) -> Rendition {
        Rendition::new(WHITE, "sedan", "Riding a white Sedan")
    }
}

impl Suv for DarkSuv {
    fn drive(&self) -> Rendition {
        Rendition::new(DARK, "suv", "Riding a dark SUV")
    }
}

impl Sedan for DarkSedan {
    fn drive(&self) -> Rendition {
        Rendition::new(DARK, "sedan", "Riding a dark Sedan")
    }
}

pub struct WhiteCarFactory;

impl FamilyFactory for WhiteCarFactory {
    fn variant(&self) -> VariantKey {
        WHITE.into()
    }
}

impl VehicleFactory for WhiteCarFactory {
    fn create_suv(&self) -> Box<dyn Suv> {
        Box::new(WhiteSuv)
    }

    fn create_sedan(&self) -> Box<dyn Sedan> {
        Box::new(WhiteSedan)
    }
}

pub struct DarkCarFactory;

impl FamilyFactory for DarkCarFactory {
    fn variant(&self) -> VariantKey {
        DARK.into()
    }
}

impl VehicleFactory for DarkCarFactory {
    fn create_suv(&self) -> Box<dyn Suv> {
        Box::new(DarkSuv)
    }

    fn create_sedan(&self) -> Box<dyn Sedan> {
        Box::new(DarkSedan)
    }
}

pub fn registry() -> Result<FactoryRegistry<dyn VehicleFactory>> {
    FactoryRegistry::new(FAMILY)
        .with(WHITE, || -> Arc<dyn VehicleFactory> { Arc::new(WhiteCarFactory) })?
        .with(DARK, || -> Arc<dyn VehicleFactory> { Arc::new(DarkCarFactory) })
}

/// Take both cars of one finish for a drive
pub fn test_drive(factory: &dyn VehicleFactory) -> Vec<Rendition> {
    vec![factory.create_suv().drive(), factory.create_sedan().drive()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::ensure_consistent;

    #[test]
    fn white_factory_builds_white_cars() {
        let drives = test_drive(&WhiteCarFactory);
        assert_eq!(drives[0].detail, "Riding a white SUV");
        assert_eq!(drives[1].detail, "Riding a white Sedan");
        assert_eq!(ensure_consistent(&drives).unwrap(), WHITE);
    }

    #[test]
    fn resolved_dark_factory_builds_dark_cars() {
        let registry = registry().unwrap();
        let factory = registry.resolve_factory(DARK).unwrap();
        let drives = test_drive(factory.as_ref());
        assert_eq!(ensure_consistent(&drives).unwrap(), DARK);
        assert_eq!(registry.variants().len(), 2);
    }

    #[test]
    fn unpainted_variant_is_not_registered() {
        let registry = registry().unwrap();
        assert!(registry.resolve_factory("red").err().unwrap().is_configuration());
    }
}
