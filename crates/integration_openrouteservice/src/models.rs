//! Raw openrouteservice request and response types

use serde::{Deserialize, Serialize};

/// Geocoding search response (GeoJSON feature collection)
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feature {
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    /// `[longitude, latitude]`
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeatureProperties {
    pub label: Option<String>,
    pub confidence: Option<f64>,
}

/// Directions request body
#[derive(Debug, Serialize)]
pub(crate) struct DirectionsRequest {
    pub coordinates: [[f64; 2]; 2],
}

/// Directions response (JSON format)
#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Route {
    #[serde(default)]
    pub summary: RouteSummaryRaw,
}

/// Route totals; both fields are omitted for zero-length routes
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RouteSummaryRaw {
    pub distance: Option<f64>,
    pub duration: Option<f64>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorDetail {
    Object { message: Option<String> },
    Text(String),
}

impl ApiErrorBody {
    pub fn message(self) -> Option<String> {
        match self.error? {
            ApiErrorDetail::Object { message } => message,
            ApiErrorDetail::Text(text) => Some(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_response_parsing() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [8.540192, 47.378177] },
                "properties": { "label": "Zürich HB, Zürich, Switzerland", "confidence": 1 }
            }]
        }"#;
        let parsed: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.features.len(), 1);
        let feature = &parsed.features[0];
        assert_eq!(
            feature.geometry.as_ref().unwrap().coordinates,
            vec![8.540192, 47.378177]
        );
        let props = feature.properties.as_ref().unwrap();
        assert_eq!(props.label.as_deref(), Some("Zürich HB, Zürich, Switzerland"));
    }

    #[test]
    fn test_geocode_response_without_features() {
        let parsed: GeocodeResponse = serde_json::from_str(r#"{"type":"FeatureCollection"}"#).unwrap();
        assert!(parsed.features.is_empty());
    }

    #[test]
    fn test_directions_request_serialization() {
        let body = DirectionsRequest {
            coordinates: [[8.54, 47.37], [7.44, 46.94]],
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"coordinates":[[8.54,47.37],[7.44,46.94]]}"#
        );
    }

    #[test]
    fn test_directions_response_parsing() {
        let json = r#"{"routes":[{"summary":{"distance":125340.2,"duration":5432.1},"bbox":[1,2,3,4]}]}"#;
        let parsed: DirectionsResponse = serde_json::from_str(json).unwrap();
        let summary = &parsed.routes[0].summary;
        assert_eq!(summary.distance, Some(125_340.2));
        assert_eq!(summary.duration, Some(5432.1));
    }

    #[test]
    fn test_directions_empty_summary() {
        let json = r#"{"routes":[{"summary":{}}]}"#;
        let parsed: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.routes[0].summary.distance.is_none());
    }
}
