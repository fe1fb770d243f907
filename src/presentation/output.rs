//! Output Rendering
//!
//! Text renderers return `String`s so commands can print them and tests can
//! inspect them. JSON renderers produce one `{"event": ...}` object per call.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::LoadedConfig;
use crate::domain::entities::{CollectionReport, ImpactFactorTable, ImpactReport, ImpactTotals};
use crate::domain::services::{IndustryBaseline, IndustryComparison};
use crate::error::ImpactError;
use crate::models::{Category, Material};

/// "3 × dress (organic)"
pub fn describe_garment(quantity: u32, category: Category, material: Material) -> String {
    format!("{} × {} ({})", quantity, category, material)
}

/// Human-readable text renderer
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Decimal places for every number
    pub precision: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl TextRenderer {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn metric(&self, out: &mut String, icon: &str, label: &str, value: f64, unit: &str) {
        let _ = writeln!(
            out,
            "  {} {:<20}{:>14.*} {}",
            icon, label, self.precision, value, unit
        );
    }

    fn totals(&self, out: &mut String, totals: &impl ImpactTotals) {
        self.metric(out, "💧", "Water saved", totals.water_saved_liters(), "L");
        self.metric(out, "🌍", "CO2 prevented", totals.co2_prevented_kg(), "kg");
        self.metric(out, "🧪", "Chemicals avoided", totals.chemicals_saved_kg(), "kg");
        self.metric(out, "♻", "Waste reduced", totals.waste_reduced_kg(), "kg");

        if !totals.equivalents().is_empty() {
            out.push_str("\nThat's like:\n");
            for (kind, value) in totals.equivalents() {
                let _ = writeln!(
                    out,
                    "  • {:<26}{:>14.*}",
                    kind.label(),
                    self.precision,
                    value
                );
            }
        }
    }

    pub fn report(&self, report: &ImpactReport) -> String {
        let mut out = String::new();
        out.push_str("🌱 Impact Report\n");
        let _ = writeln!(
            out,
            "Garment: {}\n",
            describe_garment(report.quantity(), report.category(), report.material())
        );
        self.totals(&mut out, report);
        out
    }

    pub fn collection(&self, report: &CollectionReport) -> String {
        let mut out = String::new();
        out.push_str("🌱 Collection Impact\n");
        let _ = writeln!(
            out,
            "Items: {} ({} garments)\n",
            report.items_count(),
            report.total_quantity()
        );
        for item in report.items() {
            let _ = writeln!(
                out,
                "  - {:<36}{:>14.*} L {:>10.*} kg CO2",
                describe_garment(item.quantity(), item.category(), item.material()),
                self.precision,
                item.water_saved_liters(),
                self.precision,
                item.co2_prevented_kg()
            );
        }
        if !report.items().is_empty() {
            out.push('\n');
        }
        out.push_str("Totals:\n");
        self.totals(&mut out, report);
        out
    }

    pub fn factors(
        &self,
        table: &ImpactFactorTable,
        category: Option<Category>,
        material: Option<Material>,
    ) -> String {
        let mut out = String::new();
        out.push_str("📋 Impact Factors (per garment)\n\n");
        let _ = writeln!(
            out,
            "  {:<10} {:<16} {:>12} {:>10} {:>12} {:>10}",
            "category", "material", "water L", "CO2 kg", "chemicals kg", "waste kg"
        );

        let mut shown = 0usize;
        for (c, m, f) in table.factors() {
            if category.is_some_and(|want| want != c) || material.is_some_and(|want| want != m) {
                continue;
            }
            shown += 1;
            let p = self.precision;
            let _ = writeln!(
                out,
                "  {:<10} {:<16} {:>12.*} {:>10.*} {:>12.*} {:>10.*}",
                c.as_str(),
                m.as_str(),
                p,
                f.water_liters,
                p,
                f.co2_kg,
                p,
                f.chemicals_kg,
                p,
                f.waste_kg
            );
        }
        if shown == 0 {
            out.push_str("  (no matching entries)\n");
        }

        out.push_str("\nEquivalents:\n");
        for (kind, divisor) in table.divisors() {
            let _ = writeln!(
                out,
                "  {:<20} {} {}",
                kind.key(),
                divisor,
                kind.divisor_unit()
            );
        }
        out
    }

    pub fn industry(
        &self,
        baseline: &IndustryBaseline,
        comparison: Option<(&ImpactReport, &IndustryComparison)>,
    ) -> String {
        let mut out = String::new();
        out.push_str("🏭 Fashion Industry Footprint (annual)\n\n");
        let _ = writeln!(
            out,
            "  Water used:            {:.3e} L",
            baseline.annual_water_usage_liters
        );
        let _ = writeln!(
            out,
            "  CO2 emitted:           {:.3e} kg",
            baseline.annual_co2_emissions_kg
        );
        let _ = writeln!(
            out,
            "  Textile waste:         {:.3e} kg",
            baseline.annual_textile_waste_kg
        );
        let _ = writeln!(
            out,
            "  Share of global CO2:   {}%",
            baseline.percentage_global_carbon
        );
        let _ = writeln!(
            out,
            "  Share of wastewater:   {}%",
            baseline.percentage_global_wastewater
        );
        let _ = writeln!(
            out,
            "  Clothes dumped:        {} kg per second",
            baseline.clothes_dumped_per_second_kg
        );

        if let Some((report, cmp)) = comparison {
            let _ = writeln!(
                out,
                "\nCompared with {}:",
                describe_garment(report.quantity(), report.category(), report.material())
            );
            let _ = writeln!(out, "  Water share:   {:.3e}", cmp.water_share);
            let _ = writeln!(out, "  CO2 share:     {:.3e}", cmp.co2_share);
            let _ = writeln!(out, "  Waste share:   {:.3e}", cmp.waste_share);
            let _ = writeln!(
                out,
                "  Equal to {:.*} seconds of industry clothing disposal",
                self.precision, cmp.dumping_seconds
            );
        }
        out
    }

    pub fn check(&self, loaded: &LoadedConfig, table: &ImpactFactorTable) -> String {
        let mut out = String::new();
        out.push_str("🩺 Config Check\n");
        match &loaded.source {
            Some(path) => {
                let _ = writeln!(out, "Source: {}", path.display());
            }
            None => out.push_str("Source: built-in defaults\n"),
        }
        out.push('\n');
        for warning in &loaded.warnings {
            let _ = writeln!(out, "  ⚠ {}", warning);
        }
        let _ = writeln!(
            out,
            "  ✓ {} factor entries, {} equivalents",
            table.len(),
            table.divisors().count()
        );

        let missing = Category::ALL.len() * Material::ALL.len() - table.len();
        if missing > 0 {
            let _ = writeln!(
                out,
                "  ⚠ {} category/material combinations have no factor",
                missing
            );
        }
        out
    }
}

fn event<T: Serialize>(name: &str, body: &T) -> Value {
    let mut value = serde_json::to_value(body).unwrap_or(Value::Null);
    match value.as_object_mut() {
        Some(map) => {
            map.insert("event".to_string(), Value::from(name));
            value
        }
        None => json!({ "event": name, "data": value }),
    }
}

/// `{"event": "impact", ...report}`
pub fn report_event(report: &ImpactReport) -> Value {
    event("impact", report)
}

/// `{"event": "collection", ...report}`
pub fn collection_event(report: &CollectionReport) -> Value {
    event("collection", report)
}

pub fn factors_event(
    table: &ImpactFactorTable,
    category: Option<Category>,
    material: Option<Material>,
) -> Value {
    let factors: Vec<Value> = table
        .factors()
        .filter(|(c, m, _)| {
            category.map_or(true, |want| want == *c) && material.map_or(true, |want| want == *m)
        })
        .map(|(c, m, f)| {
            json!({
                "category": c,
                "material": m,
                "waterLiters": f.water_liters,
                "co2Kg": f.co2_kg,
                "chemicalsKg": f.chemicals_kg,
                "wasteKg": f.waste_kg,
            })
        })
        .collect();
    let equivalents: serde_json::Map<String, Value> = table
        .divisors()
        .map(|(kind, divisor)| (kind.key().to_string(), Value::from(divisor)))
        .collect();

    json!({
        "event": "factors",
        "factors": factors,
        "equivalents": equivalents,
    })
}

pub fn industry_event(
    baseline: &IndustryBaseline,
    comparison: Option<(&ImpactReport, &IndustryComparison)>,
) -> Value {
    let mut value = json!({
        "event": "industry",
        "baseline": baseline,
    });
    if let Some((report, cmp)) = comparison {
        value["report"] = serde_json::to_value(report).unwrap_or(Value::Null);
        value["comparison"] = serde_json::to_value(cmp).unwrap_or(Value::Null);
    }
    value
}

pub fn check_event(loaded: &LoadedConfig, table: &ImpactFactorTable) -> Value {
    let warnings: Vec<Value> = loaded
        .warnings
        .iter()
        .map(|w| {
            json!({
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            })
        })
        .collect();
    json!({
        "event": "check",
        "source": loaded.source.as_ref().map(|p| p.display().to_string()),
        "entries": table.len(),
        "equivalents": table.divisors().count(),
        "warnings": warnings,
        "success": true,
    })
}

/// Error event for calculator failures
pub fn impact_error_event(err: &ImpactError) -> Value {
    match err {
        ImpactError::InvalidInput { field, reason } => json!({
            "event": "error",
            "kind": "invalid_input",
            "field": field,
            "message": reason,
        }),
        ImpactError::UnknownCombination { category, material } => json!({
            "event": "error",
            "kind": "unknown_combination",
            "category": category,
            "material": material,
            "message": err.to_string(),
        }),
    }
}

/// Error event for anything else
pub fn error_event(message: &str) -> Value {
    json!({
        "event": "error",
        "kind": "other",
        "message": message,
    })
}
