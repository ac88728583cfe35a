//! Logistics line (factory method)
//!
//! Delivery planning only sees [`Transport`]; road logistics hands out trucks
//! and sea logistics hands out ships. A sea fleet may be bounded, in which
//! case planning fails once every ship has been dispatched.

use kiln_core::{
    CreationError, Creator, CreatorRegistry, ProductLine, Rendition, Result, VariantKey,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

pub const LINE: &str = "logistics";
pub const ROAD: &str = "road";
pub const SEA: &str = "sea";

pub trait Transport {
    fn mode(&self) -> &'static str;
    fn deliver(&self) -> String;
}

pub struct Truck;
pub struct Ship;

impl Transport for Truck {
    fn mode(&self) -> &'static str {
        "truck"
    }

    fn deliver(&self) -> String {
        "Delivering cargo by land in a box".to_string()
    }
}

impl Transport for Ship {
    fn mode(&self) -> &'static str {
        "ship"
    }

    fn deliver(&self) -> String {
        "Delivering cargo by sea in a container".to_string()
    }
}

/// Outcome of planning one delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPlan {
    pub transport: String,
    pub route: String,
}

impl DeliveryPlan {
    /// Rendition of this plan, attributed to the creator key it came from
    pub fn rendition(&self, creator: impl Into<VariantKey>) -> Rendition {
        Rendition::new(creator, LINE, format!("{} ({})", self.route, self.transport))
    }
}

/// Planning logic shared by every logistics creator
pub struct LogisticsLine;

impl ProductLine for LogisticsLine {
    type Product = dyn Transport;
    type Output = DeliveryPlan;

    fn operate(product: &Self::Product) -> DeliveryPlan {
        DeliveryPlan {
            transport: product.mode().to_string(),
            route: product.deliver(),
        }
    }
}

pub struct RoadLogistics;

impl Creator for RoadLogistics {
    type Line = LogisticsLine;

    fn factory_method(&self) -> Result<Box<dyn Transport>> {
        Ok(Box::new(Truck))
    }
}

/// Sea logistics, optionally limited to a fixed number of ships
#[derive(Default)]
pub struct SeaLogistics {
    /// Ships still in port; `None` is an unbounded fleet
    fleet: Option<AtomicUsize>,
}

impl SeaLogistics {
    pub fn with_fleet(ships: usize) -> Self {
        Self {
            fleet: Some(AtomicUsize::new(ships)),
        }
    }

    /// Ships still available, `None` when the fleet is unbounded
    pub fn ships_in_port(&self) -> Option<usize> {
        self.fleet.as_ref().map(|f| f.load(Ordering::Acquire))
    }

    fn dispatch(&self) -> Result<()> {
        let Some(fleet) = &self.fleet else {
            return Ok(());
        };
        match fleet.fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1)) {
            Ok(before) => {
                debug!(remaining = before - 1, "Ship dispatched");
                Ok(())
            }
            Err(_) => Err(CreationError::unavailable("ship", "fleet exhausted")),
        }
    }
}

impl Creator for SeaLogistics {
    type Line = LogisticsLine;

    fn factory_method(&self) -> Result<Box<dyn Transport>> {
        self.dispatch()?;
        Ok(Box::new(Ship))
    }
}

pub fn registry() -> Result<CreatorRegistry<LogisticsLine>> {
    CreatorRegistry::new(LINE)
        .with(ROAD, || -> Arc<dyn Creator<Line = LogisticsLine>> { Arc::new(RoadLogistics) })?
        .with(SEA, || -> Arc<dyn Creator<Line = LogisticsLine>> {
            Arc::new(SeaLogistics::default())
        })
}
