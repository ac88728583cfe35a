//! The product catalog
//!
//! [`Catalog`] owns one registry per family and per product line and is the
//! only entry point client code needs. A process normally shares a single
//! catalog through [`global`].

use crate::armour::{self, ArmourLine};
use crate::config::CatalogConfig;
use crate::furniture::{self, FurnitureFactory};
use crate::logistics::{self, LogisticsLine};
use crate::themes::{self, ThemeFactory};
use crate::vehicles::{self, VehicleFactory};
use kiln_core::{
    ensure_consistent, CreationError, CreatorRegistry, FactoryRegistry, Rendition, Result,
    SingletonCell, TemplateOperation, VariantKey,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Registry name used for errors about unknown families
pub const CATALOG: &str = "catalog";

/// How a catalog entry produces its products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Abstract factory: one factory per variant builds the whole family
    Factory,
    /// Factory method: one creator per key runs the line's fixed operation
    Creator,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factory => write!(f, "factory"),
            Self::Creator => write!(f, "creator"),
        }
    }
}

/// One family or product line offered by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyEntry {
    pub name: String,
    pub kind: EntryKind,
    pub keys: Vec<VariantKey>,
}

/// Products built for one showroom stand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showcase {
    pub family: String,
    pub selection: VariantKey,
    pub renditions: Vec<Rendition>,
}

pub struct Catalog {
    furniture: FactoryRegistry<dyn FurnitureFactory>,
    vehicles: FactoryRegistry<dyn VehicleFactory>,
    themes: FactoryRegistry<dyn ThemeFactory>,
    armour: CreatorRegistry<ArmourLine>,
    logistics: CreatorRegistry<LogisticsLine>,
}

impl Catalog {
    /// Catalog with every built-in variant and creator registered
    pub fn standard() -> Result<Self> {
        let catalog = Self {
            furniture: furniture::registry()?,
            vehicles: vehicles::registry()?,
            themes: themes::registry()?,
            armour: armour::registry()?,
            logistics: logistics::registry()?,
        };
        debug!(families = catalog.families().len(), "Catalog assembled");
        Ok(catalog)
    }

    /// Build every product of `family` in `variant`.
    ///
    /// Factory families resolve one factory and build all roles from it; the
    /// result is checked to share one variant. Product lines run the
    /// resolved creator's operation once.
    pub fn build(&self, family: &str, variant: &str) -> Result<Vec<Rendition>> {
        let renditions = match family {
            furniture::FAMILY => {
                furniture::furnish(self.furniture.resolve_factory(variant)?.as_ref())
            }
            vehicles::FAMILY => vehicles::test_drive(self.vehicles.resolve_factory(variant)?.as_ref()),
            themes::FAMILY => themes::render_form(self.themes.resolve_factory(variant)?.as_ref()),
            armour::LINE | logistics::LINE => return Ok(vec![self.craft(family, variant)?]),
            _ => return Err(CreationError::unknown(CATALOG, family)),
        };
        ensure_consistent(&renditions)?;
        debug!(family, variant, products = renditions.len(), "Family built");
        Ok(renditions)
    }

    /// Resolve `creator` in product line `line` and run its operation.
    ///
    /// The rendition's variant is the creator key, whatever product it built.
    pub fn craft(&self, line: &str, creator: &str) -> Result<Rendition> {
        let rendition = match line {
            armour::LINE => self
                .armour
                .resolve_creator(creator)?
                .template_operation()?
                .rendition(creator),
            logistics::LINE => self
                .logistics
                .resolve_creator(creator)?
                .template_operation()?
                .rendition(creator),
            _ => return Err(CreationError::unknown(CATALOG, line)),
        };
        debug!(line, creator, "Creator ran");
        Ok(rendition)
    }

    /// Every family and product line with its registered keys
    pub fn families(&self) -> Vec<FamilyEntry> {
        let factory = |name: &str, keys: Vec<VariantKey>| FamilyEntry {
            name: name.to_string(),
            kind: EntryKind::Factory,
            keys,
        };
        let creator = |name: &str, keys: Vec<VariantKey>| FamilyEntry {
            name: name.to_string(),
            kind: EntryKind::Creator,
            keys,
        };
        vec![
            factory(furniture::FAMILY, self.furniture.variants()),
            factory(vehicles::FAMILY, self.vehicles.variants()),
            factory(themes::FAMILY, self.themes.variants()),
            creator(armour::LINE, self.armour.keys()),
            creator(logistics::LINE, self.logistics.keys()),
        ]
    }

    /// Build one stand per family using the configured selections.
    ///
    /// Fails on the first selection that names an unregistered key.
    pub fn showroom(&self, config: &CatalogConfig) -> Result<Vec<Showcase>> {
        self.families()
            .into_iter()
            .map(|entry| {
                let selection = config
                    .selection_for(&entry.name)
                    .ok_or_else(|| CreationError::unknown(CATALOG, entry.name.as_str()))?;
                let renditions = self.build(&entry.name, selection)?;
                Ok(Showcase {
                    family: entry.name,
                    selection: VariantKey::from(selection),
                    renditions,
                })
            })
            .collect()
    }
}

fn bootstrap() -> anyhow::Result<Catalog> {
    Ok(Catalog::standard()?)
}

static GLOBAL: SingletonCell<Catalog> = SingletonCell::new(bootstrap);

/// The process-wide catalog, assembled on first use
pub fn global() -> Result<Arc<Catalog>> {
    GLOBAL.get_instance()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_factory_family() {
        let catalog = Catalog::standard().unwrap();
        let room = catalog.build("furniture", "art-deco").unwrap();
        assert_eq!(room.len(), 3);
        assert!(room.iter().all(|r| r.variant == "art-deco"));

        let cars = catalog.build("vehicles", "dark").unwrap();
        assert_eq!(cars[0].detail, "Riding a dark SUV");
    }

    #[test]
    fn build_routes_lines_through_creators() {
        let catalog = Catalog::standard().unwrap();
        let built = catalog.build("armour", "helmet").unwrap();
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].detail, "Durability: Helmet durability: 300/300");
    }

    #[test]
    fn unknown_family_is_configuration_error() {
        let catalog = Catalog::standard().unwrap();
        match catalog.build("pottery", "raku") {
            Err(CreationError::Configuration { registry, key }) => {
                assert_eq!(registry, CATALOG);
                assert_eq!(key, "pottery");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_variant_names_its_family() {
        let catalog = Catalog::standard().unwrap();
        match catalog.build("themes", "solarized") {
            Err(CreationError::Configuration { registry, .. }) => assert_eq!(registry, "themes"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn craft_rejects_factory_families() {
        let catalog = Catalog::standard().unwrap();
        assert!(catalog.craft("furniture", "modern").is_err());
        let plan = catalog.craft("logistics", "road").unwrap();
        assert_eq!(plan.variant, "road");
        assert!(plan.detail.ends_with("(truck)"));
    }

    #[test]
    fn families_lists_keys_by_kind() {
        let catalog = Catalog::standard().unwrap();
        let families = catalog.families();
        assert_eq!(families.len(), 5);

        let furniture = &families[0];
        assert_eq!(furniture.kind, EntryKind::Factory);
        assert_eq!(furniture.keys, vec!["art-deco", "modern", "victorian"]);

        let logistics = families.iter().find(|f| f.name == "logistics").unwrap();
        assert_eq!(logistics.kind, EntryKind::Creator);
        assert_eq!(logistics.keys, vec!["road", "sea"]);
    }

    #[test]
    fn showroom_uses_configured_selections() {
        let catalog = Catalog::standard().unwrap();
        let mut config = CatalogConfig::default();
        config.selection.furniture = "victorian".into();
        config.selection.logistics = "sea".into();

        let stands = catalog.showroom(&config).unwrap();
        assert_eq!(stands.len(), 5);
        assert_eq!(stands[0].selection, "victorian");
        assert!(stands[0].renditions.iter().all(|r| r.variant == "victorian"));
        assert_eq!(stands[4].renditions[0].variant, "sea");
    }

    #[test]
    fn every_stand_belongs_to_its_selection() {
        let catalog = Catalog::standard().unwrap();
        let mut config = CatalogConfig::default();
        config.selection.themes = "dark".into();
        config.selection.armour = "pauldron".into();

        for stand in catalog.showroom(&config).unwrap() {
            assert!(!stand.renditions.is_empty(), "{} built nothing", stand.family);
            for rendition in &stand.renditions {
                assert!(
                    rendition.belongs_to(&stand.selection),
                    "{} stand '{}' holds {}",
                    stand.family,
                    stand.selection,
                    rendition
                );
            }
        }
    }

    #[test]
    fn showroom_fails_closed_on_unknown_selection() {
        let catalog = Catalog::standard().unwrap();
        let mut config = CatalogConfig::default();
        config.selection.vehicles = "red".into();
        assert!(catalog.showroom(&config).is_err());
    }

    #[test]
    fn global_catalog_is_shared() {
        let first = global().unwrap();
        let second = global().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
