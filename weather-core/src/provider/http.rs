use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::{
    FetchError,
    model::{NOT_AVAILABLE, Reading, WeatherReport},
};

use super::WeatherProvider;

/// Plain `GET {endpoint}?cityname={city}` against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    endpoint: String,
    http: Client,
}

impl HttpProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for HttpProvider {
    async fn current(&self, city: &str) -> Result<WeatherReport, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, city, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("cityname", city)])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%status, city, "weather endpoint rejected city");
            return Err(FetchError::NotFound);
        }

        let body = res.text().await?;
        parse_report(&body)
    }
}

/// Map the endpoint's JSON object onto a report.
///
/// Empty values (absent, `null`, `false`, `0`, `""`) become the placeholder;
/// anything else is kept, as a number where possible and as text otherwise.
pub fn parse_report(body: &str) -> Result<WeatherReport, FetchError> {
    let fields: Map<String, Value> = serde_json::from_str(body)?;

    let description = non_empty(fields.get("description"))
        .map_or_else(|| NOT_AVAILABLE.to_string(), as_text);

    Ok(WeatherReport {
        description,
        temperature: reading(fields.get("temp_in_celsius")),
        pressure: reading(fields.get("pressure_in_hPa")),
    })
}

fn reading(value: Option<&Value>) -> Reading {
    match non_empty(value) {
        None => Reading::Unavailable,
        Some(v) => v
            .as_f64()
            .map_or_else(|| Reading::Text(as_text(v)), Reading::Value),
    }
}

fn non_empty(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_body_maps_every_field() {
        let report = parse_report(
            r#"{"description":"Clear","temp_in_celsius":15,"pressure_in_hPa":1012}"#,
        )
        .expect("valid body");

        assert_eq!(report.description, "Clear");
        assert_eq!(report.temperature, Reading::Value(15.0));
        assert_eq!(report.pressure, Reading::Value(1012.0));
    }

    #[test]
    fn missing_fields_fall_back_to_placeholder() {
        let report = parse_report("{}").expect("valid body");

        assert_eq!(report.description, "N/A");
        assert_eq!(report.temperature, Reading::Unavailable);
        assert_eq!(report.pressure, Reading::Unavailable);
    }

    #[test]
    fn empty_values_fall_back() {
        let report = parse_report(
            r#"{"description":"","temp_in_celsius":null,"pressure_in_hPa":false}"#,
        )
        .expect("valid body");

        assert_eq!(report.description, "N/A");
        assert_eq!(report.temperature, Reading::Unavailable);
        assert_eq!(report.pressure, Reading::Unavailable);
    }

    #[test]
    fn zero_counts_as_empty() {
        let report = parse_report(r#"{"temp_in_celsius":0,"pressure_in_hPa":0.0}"#)
            .expect("valid body");

        assert_eq!(report.temperature, Reading::Unavailable);
        assert_eq!(report.pressure, Reading::Unavailable);
        assert_eq!(report.temperature.to_string(), "N/A");
    }

    #[test]
    fn non_numeric_values_are_kept_as_text() {
        let report = parse_report(
            r#"{"description":"Clear","temp_in_celsius":0,"pressure_in_hPa":"1012"}"#,
        )
        .expect("valid body");

        assert_eq!(report.temperature, Reading::Unavailable);
        assert_eq!(report.pressure, Reading::Text("1012".into()));
        assert_eq!(report.pressure.to_string(), "1012");
    }

    #[test]
    fn non_string_description_is_kept_as_text() {
        let report = parse_report(r#"{"description":42,"temp_in_celsius":-3.5}"#)
            .expect("valid body");

        assert_eq!(report.description, "42");
        assert_eq!(report.temperature, Reading::Value(-3.5));
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = parse_report("[1, 2]").unwrap_err();
        assert!(matches!(err, FetchError::InvalidBody(_)));

        let err = parse_report("<html>").unwrap_err();
        assert!(matches!(err, FetchError::InvalidBody(_)));
    }
}
