//! Phone record type and spec-field magnitude parsers
//!
//! All spec fields are free-form text as scraped; the numeric accessors pull
//! magnitudes out of that text and return `None` when nothing parseable is
//! present. Scoring and filtering treat `None` as "no contribution".

use serde::{Deserialize, Serialize};

/// A single phone's catalog entry. `model_name` is the unique identity key
/// across all lookups; every other field is free-form text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRecord {
    pub model_name: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub battery: String,
    #[serde(default)]
    pub camera: String,
    #[serde(default)]
    pub ram: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub chipset: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub url: String,
}

/// Canonical comparison attribute order. Comparisons iterate this sequence;
/// rendering relies on the declaration order staying fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecField {
    Display,
    Battery,
    Camera,
    Ram,
    Storage,
    Chipset,
    Price,
}

impl SpecField {
    /// All comparable fields in canonical order
    pub const ALL: [SpecField; 7] = [
        SpecField::Display,
        SpecField::Battery,
        SpecField::Camera,
        SpecField::Ram,
        SpecField::Storage,
        SpecField::Chipset,
        SpecField::Price,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecField::Display => "display",
            SpecField::Battery => "battery",
            SpecField::Camera => "camera",
            SpecField::Ram => "ram",
            SpecField::Storage => "storage",
            SpecField::Chipset => "chipset",
            SpecField::Price => "price",
        }
    }
}

impl std::fmt::Display for SpecField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PhoneRecord {
    /// Value of a comparable field, as stored
    pub fn field_value(&self, field: SpecField) -> &str {
        match field {
            SpecField::Display => &self.display,
            SpecField::Battery => &self.battery,
            SpecField::Camera => &self.camera,
            SpecField::Ram => &self.ram,
            SpecField::Storage => &self.storage,
            SpecField::Chipset => &self.chipset,
            SpecField::Price => &self.price,
        }
    }

    /// Battery capacity in mAh, if the battery text carries one
    pub fn battery_mah(&self) -> Option<u32> {
        number_before_unit(&self.battery, "mah")
    }

    /// Main camera resolution in MP
    pub fn camera_mp(&self) -> Option<u32> {
        number_before_unit(&self.camera, "mp")
    }

    /// RAM size in GB
    pub fn ram_gb(&self) -> Option<u32> {
        number_before_unit(&self.ram, "gb")
    }

    /// USD price parsed from text like "$1,299.99" or "$ 799"
    pub fn price_usd(&self) -> Option<f64> {
        parse_dollar_amount(&self.price)
    }
}

/// Find the first integer immediately preceding `unit` (case-insensitive,
/// optional whitespace between number and unit, unit must end at a word
/// boundary). Returns `None` when the text carries no such magnitude.
fn number_before_unit(text: &str, unit: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    let bytes = lower.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let digits = &lower[start..i];

            let mut j = i;
            while j < bytes.len() && (bytes[j] == b' ' || bytes[j] == b'\t') {
                j += 1;
            }
            if lower[j..].starts_with(unit) {
                let after = j + unit.len();
                let bounded = after >= bytes.len() || !bytes[after].is_ascii_alphanumeric();
                if bounded {
                    if let Ok(value) = digits.parse::<u32>() {
                        return Some(value);
                    }
                }
            }
        } else {
            i += 1;
        }
    }

    None
}

/// Parse the first dollar amount in the text. Accepts thousands separators
/// and an optional decimal part.
fn parse_dollar_amount(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' {
            let mut j = i + 1;
            while j < bytes.len() && (bytes[j] == b' ' || bytes[j] == b'\t') {
                j += 1;
            }
            let start = j;
            let mut raw = String::new();
            let mut seen_dot = false;
            while j < bytes.len() {
                match bytes[j] {
                    b'0'..=b'9' => raw.push(bytes[j] as char),
                    b',' => {}
                    b'.' if !seen_dot => {
                        seen_dot = true;
                        raw.push('.');
                    }
                    _ => break,
                }
                j += 1;
            }
            if j > start && !raw.is_empty() && raw != "." {
                if let Ok(value) = raw.parse::<f64>() {
                    return Some(value);
                }
            }
            i = j.max(i + 1);
        } else {
            i += 1;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(battery: &str, camera: &str, ram: &str, price: &str) -> PhoneRecord {
        PhoneRecord {
            model_name: "Galaxy Test".to_string(),
            release_date: String::new(),
            display: String::new(),
            battery: battery.to_string(),
            camera: camera.to_string(),
            ram: ram.to_string(),
            storage: String::new(),
            price: price.to_string(),
            chipset: String::new(),
            os: String::new(),
            body: String::new(),
            url: String::new(),
        }
    }

    #[test]
    fn test_battery_mah_parsing() {
        let r = record_with("5000 mAh, 45W wired", "", "", "");
        assert_eq!(r.battery_mah(), Some(5000));

        let r = record_with("5000mAh", "", "", "");
        assert_eq!(r.battery_mah(), Some(5000));
    }

    #[test]
    fn test_battery_unparseable() {
        let r = record_with("N/A", "", "", "");
        assert_eq!(r.battery_mah(), None);

        let r = record_with("", "", "", "");
        assert_eq!(r.battery_mah(), None);
    }

    #[test]
    fn test_camera_mp_parsing() {
        let r = record_with("", "200 MP main + 12 MP ultrawide", "", "");
        assert_eq!(r.camera_mp(), Some(200));
    }

    #[test]
    fn test_unit_word_boundary() {
        // "mph" must not parse as "mp"
        let r = record_with("", "fast 10 mph shutter", "", "");
        assert_eq!(r.camera_mp(), None);
    }

    #[test]
    fn test_ram_gb_parsing() {
        let r = record_with("", "", "12GB", "");
        assert_eq!(r.ram_gb(), Some(12));
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(record_with("", "", "", "$1299").price_usd(), Some(1299.0));
        assert_eq!(
            record_with("", "", "", "$ 1,049.99").price_usd(),
            Some(1049.99)
        );
        assert_eq!(record_with("", "", "", "$499.94").price_usd(), Some(499.94));
        assert_eq!(record_with("", "", "", "N/A").price_usd(), None);
        assert_eq!(record_with("", "", "", "around $").price_usd(), None);
    }

    #[test]
    fn test_canonical_field_order() {
        let names: Vec<&str> = SpecField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec!["display", "battery", "camera", "ram", "storage", "chipset", "price"]
        );
    }
}
