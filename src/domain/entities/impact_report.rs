//! Calculator output entities
//!
//! Reports are built once by the calculator and only read afterwards; fields
//! are private and exposed through accessors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EquivalentKind;
use crate::models::{Category, Material};

/// Primary totals shared by single-garment and collection reports
pub trait ImpactTotals {
    fn water_saved_liters(&self) -> f64;
    fn co2_prevented_kg(&self) -> f64;
    fn chemicals_saved_kg(&self) -> f64;
    fn waste_reduced_kg(&self) -> f64;
    fn equivalents(&self) -> &BTreeMap<EquivalentKind, f64>;

    /// Value of one equivalent, if the table defines it
    fn equivalent(&self, kind: EquivalentKind) -> Option<f64> {
        self.equivalents().get(&kind).copied()
    }
}

/// Impact of one garment descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    category: Category,
    material: Material,
    quantity: u32,
    water_saved_liters: f64,
    co2_prevented_kg: f64,
    chemicals_saved_kg: f64,
    waste_reduced_kg: f64,
    equivalents: BTreeMap<EquivalentKind, f64>,
}

impl ImpactReport {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        category: Category,
        material: Material,
        quantity: u32,
        water_saved_liters: f64,
        co2_prevented_kg: f64,
        chemicals_saved_kg: f64,
        waste_reduced_kg: f64,
        equivalents: BTreeMap<EquivalentKind, f64>,
    ) -> Self {
        Self {
            category,
            material,
            quantity,
            water_saved_liters,
            co2_prevented_kg,
            chemicals_saved_kg,
            waste_reduced_kg,
            equivalents,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl ImpactTotals for ImpactReport {
    fn water_saved_liters(&self) -> f64 {
        self.water_saved_liters
    }

    fn co2_prevented_kg(&self) -> f64 {
        self.co2_prevented_kg
    }

    fn chemicals_saved_kg(&self) -> f64 {
        self.chemicals_saved_kg
    }

    fn waste_reduced_kg(&self) -> f64 {
        self.waste_reduced_kg
    }

    fn equivalents(&self) -> &BTreeMap<EquivalentKind, f64> {
        &self.equivalents
    }
}

/// Aggregated impact of several descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionReport {
    items_count: usize,
    total_quantity: u64,
    water_saved_liters: f64,
    co2_prevented_kg: f64,
    chemicals_saved_kg: f64,
    waste_reduced_kg: f64,
    equivalents: BTreeMap<EquivalentKind, f64>,
    items: Vec<ImpactReport>,
}

impl CollectionReport {
    pub(crate) fn new(items: Vec<ImpactReport>, equivalents: BTreeMap<EquivalentKind, f64>) -> Self {
        let mut report = Self {
            items_count: items.len(),
            total_quantity: 0,
            water_saved_liters: 0.0,
            co2_prevented_kg: 0.0,
            chemicals_saved_kg: 0.0,
            waste_reduced_kg: 0.0,
            equivalents,
            items: Vec::new(),
        };
        for item in &items {
            report.total_quantity += u64::from(item.quantity);
            report.water_saved_liters += item.water_saved_liters;
            report.co2_prevented_kg += item.co2_prevented_kg;
            report.chemicals_saved_kg += item.chemicals_saved_kg;
            report.waste_reduced_kg += item.waste_reduced_kg;
        }
        report.items = items;
        report
    }

    pub fn items_count(&self) -> usize {
        self.items_count
    }

    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// Per-item reports in input order
    pub fn items(&self) -> &[ImpactReport] {
        &self.items
    }
}

impl ImpactTotals for CollectionReport {
    fn water_saved_liters(&self) -> f64 {
        self.water_saved_liters
    }

    fn co2_prevented_kg(&self) -> f64 {
        self.co2_prevented_kg
    }

    fn chemicals_saved_kg(&self) -> f64 {
        self.chemicals_saved_kg
    }

    fn waste_reduced_kg(&self) -> f64 {
        self.waste_reduced_kg
    }

    fn equivalents(&self) -> &BTreeMap<EquivalentKind, f64> {
        &self.equivalents
    }
}
