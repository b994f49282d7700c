//! Calculator catalog - the entries listed on the HVAC calculators screen

use serde::{Deserialize, Serialize};

/// Which screen an entry opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    DeltaT,
    /// Title-only stub; no calculation behind it yet.
    #[default]
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorEntry {
    pub title: String,
    /// Icon name, resolved to a glyph by [`icon_glyph`].
    pub icon: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: CalculatorKind,
}

impl CalculatorEntry {
    pub fn placeholder(title: &str, icon: &str, description: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            icon: icon.to_string(),
            description: description.map(str::to_string),
            kind: CalculatorKind::Placeholder,
        }
    }

    pub fn delta_t() -> Self {
        Self {
            title: "Delta T (Δ)".to_string(),
            icon: "thermometer".to_string(),
            description: Some("Return minus supply".to_string()),
            kind: CalculatorKind::DeltaT,
        }
    }

    pub fn glyph(&self) -> &'static str {
        icon_glyph(&self.icon)
    }
}

/// A collapsible group of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSection {
    pub title: String,
    pub entries: Vec<CalculatorEntry>,
}

/// The built-in catalog.
pub fn default_sections() -> Vec<CalculatorSection> {
    vec![
        CalculatorSection {
            title: "Temperature Measurements".to_string(),
            entries: vec![CalculatorEntry::delta_t()],
        },
        CalculatorSection {
            title: "Field Calculators".to_string(),
            entries: vec![
                CalculatorEntry::placeholder("CFM Calculator", "wind", Some("Airflow by BTU/Ton")),
                CalculatorEntry::placeholder("Duct Sizing", "grid", Some("By CFM & Velocity")),
                CalculatorEntry::placeholder("Superheat", "thermometer", Some("Fixed orifice")),
                CalculatorEntry::placeholder("Subcooling", "snowflake", Some("TXV charging")),
                CalculatorEntry::placeholder("Static Pressure", "gauge", Some("ESP & ΔP")),
                CalculatorEntry::placeholder("Line Set", "wrench", Some("Sizing & drop")),
                CalculatorEntry::placeholder("Humidity", "drop", Some("RH & grains")),
                CalculatorEntry::placeholder("Capacity", "chart", Some("BTU & tons")),
                CalculatorEntry::placeholder("Placeholder 1", "hammer", None),
                CalculatorEntry::placeholder("Placeholder 2", "sliders", None),
            ],
        },
    ]
}

/// Map an icon name to a glyph the default fonts can draw.
/// Unknown names fall back to a plain bullet.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "wind" => "≋",
        "grid" => "▦",
        "thermometer" => "🌡",
        "snowflake" => "❄",
        "gauge" => "⏲",
        "wrench" => "🔧",
        "drop" => "💧",
        "chart" => "📊",
        "hammer" => "🔨",
        "sliders" => "☰",
        "delta" => "Δ",
        _ => "•",
    }
}
