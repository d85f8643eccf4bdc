//! Presentation of a fertilizer recommendation returned by
//! `POST /api/fertilizer-recommendation`.

use serde::{Deserialize, Serialize};

use crate::{Formatter, api::ApiError, options::Dialect, render::escape::push_escaped};

pub const CARD_TITLE: &str = "Fertilizer Recommendations";
pub const MISSING_CROP: &str = "Please fill in the Crop Type field.";

/// The form sent with a recommendation request. Measurements the user left
/// blank are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConditions {
    pub crop_type: String,
    pub soil_type: String,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    /// Percent.
    pub humidity: Option<f64>,
    /// Percent.
    pub moisture: Option<f64>,
    /// kg/ha.
    pub nitrogen: Option<f64>,
    /// kg/ha.
    pub phosphorous: Option<f64>,
}

impl FieldConditions {
    /// Reads a saved request form.
    ///
    /// # Errors
    /// [`ApiError::InvalidRequest`] when the JSON does not describe a form or
    /// the crop type is blank.
    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        let mut form: FieldConditions =
            serde_json::from_slice(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        form.crop_type = form.crop_type.trim().to_string();
        form.validate()?;
        Ok(form)
    }

    /// A request needs at least a crop type.
    ///
    /// # Errors
    /// [`ApiError::InvalidRequest`] when the crop type is blank.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.crop_type.trim().is_empty() {
            return Err(ApiError::InvalidRequest(MISSING_CROP.to_string()));
        }
        Ok(())
    }

    /// Label and display value for each summary row, skipping blank
    /// measurements.
    fn summary_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Crop Type", self.crop_type.clone()),
            ("Soil Type", self.soil_type.clone()),
        ];
        let measurements = [
            ("Temperature", self.temperature, "°C"),
            ("Humidity", self.humidity, "%"),
            ("Moisture", self.moisture, "%"),
            ("Nitrogen", self.nitrogen, " kg/ha"),
            ("Phosphorous", self.phosphorous, " kg/ha"),
        ];
        rows.extend(
            measurements
                .into_iter()
                .filter_map(|(label, value, unit)| Some((label, format!("{}{unit}", value?)))),
        );
        rows
    }
}

/// Everything the recommendation card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationView {
    /// The request form echoed back as an input summary, when known.
    pub conditions: Option<FieldConditions>,
    /// Recommendation text already formatted as HTML.
    pub body_html: String,
}

impl RecommendationView {
    pub fn from_recommendation(text: &str, conditions: Option<FieldConditions>) -> Self {
        Self::with_formatter(
            text,
            conditions,
            &Formatter::with_dialect(Dialect::Recommendation),
        )
    }

    pub fn with_formatter(
        text: &str,
        conditions: Option<FieldConditions>,
        formatter: &Formatter,
    ) -> Self {
        Self {
            conditions,
            body_html: formatter.format(Some(text)),
        }
    }

    /// Renders the result card fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::from(
            "<div class=\"fertilizer-result-card\"><div class=\"fertilizer-result-header\"><h3>",
        );
        out.push_str(CARD_TITLE);
        out.push_str("</h3></div><div class=\"fertilizer-result-content\">");
        if let Some(conditions) = &self.conditions {
            out.push_str("<div class=\"input-summary\"><strong>Input Summary:</strong><ul>");
            for (label, value) in conditions.summary_rows() {
                out.push_str("<li>");
                out.push_str(label);
                out.push_str(": <strong>");
                push_escaped(&mut out, &value, true);
                out.push_str("</strong></li>");
            }
            out.push_str("</ul></div>");
        }
        out.push_str("<div>");
        out.push_str(&self.body_html);
        out.push_str("</div></div></div>");
        out
    }
}
