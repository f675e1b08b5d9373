// Rust guideline compliant 2026-02-06

//! Core data models for TrouveTonPro.

use serde::{Deserialize, Deserializer, Serialize};

/// A listed service professional.
///
/// Records are created by deserializing one element of a directory response
/// and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Opaque identifier. The directory may send it as a number.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Free-text profession label.
    pub category: String,
    /// Optional finer profession label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sous_category: Option<String>,
    /// City of activity.
    pub city: String,
    /// Average rating (0.0-9.9).
    #[serde(default, deserialize_with = "decimal")]
    pub rating: f64,
    /// Phone number used for call intents.
    #[serde(default)]
    pub phone: String,
    /// WhatsApp number; blank values are treated as absent.
    #[serde(default, deserialize_with = "non_blank")]
    pub whatsapp_number: Option<String>,
    /// Contact email, only sent by the detail endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Biography and experience text.
    #[serde(default)]
    pub bio: String,
    /// Absolute URL of the profile image.
    #[serde(default)]
    pub image: Option<String>,
    /// Workplace latitude.
    #[serde(default, deserialize_with = "optional_decimal", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Workplace longitude.
    #[serde(default, deserialize_with = "optional_decimal", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Whether the record is visible in the directory.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Kilometers from the viewer, present only for distance ordering.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub distance: Option<f64>,
}

fn default_active() -> bool {
    true
}

impl Worker {
    /// Returns `"first last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the text searched by the result shaper: name, category and city.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.first_name, self.last_name, self.category, self.city
        )
    }

    /// Formats the distance to one decimal, e.g. `"3.2 km"`.
    #[must_use]
    pub fn distance_label(&self) -> Option<String> {
        self.distance.map(|km| format!("{km:.1} km"))
    }
}

/// Viewer position used for distance ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Geolocation {
    /// Creates a position after checking coordinate ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite or out of range.
    pub fn new(latitude: f64, longitude: f64) -> crate::Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(crate::Error::InvalidInput(format!(
                "latitude must be within -90..90, got {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(crate::Error::InvalidInput(format!(
                "longitude must be within -180..180, got {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Int(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
    })
}

fn parse_decimal<E: serde::de::Error>(scalar: Scalar) -> Result<f64, E> {
    match scalar {
        Scalar::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid decimal: {text}"))),
        Scalar::Int(value) => Ok(value as f64),
        Scalar::Float(value) => Ok(value),
    }
}

fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_decimal(Scalar::deserialize(deserializer)?)
}

fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        Some(scalar) => parse_decimal(scalar).map(Some),
        None => Ok(None),
    }
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|number| !number.trim().is_empty()))
}
