use serde::{Deserialize, Serialize};

/// A georeferenced map as published in an annotation. Only the fields needed
/// for display properties are read; everything else in the JSON is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: String,
    pub uri: String,
}

/// `[longitude, latitude]` in degrees.
pub type Position = [f64; 2];

pub type Ring = Vec<Position>;

/// GeoJSON Polygon geometry. The first ring is the exterior, the rest are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Polygon")]
pub struct Polygon {
    pub coordinates: Vec<Ring>,
}

impl Polygon {
    pub fn new(coordinates: Vec<Ring>) -> Self {
        Self { coordinates }
    }

    pub fn exterior(&self) -> Option<&Ring> {
        self.coordinates.first()
    }

    pub fn holes(&self) -> &[Ring] {
        self.coordinates.get(1..).unwrap_or(&[])
    }
}

/// Either a bare Polygon geometry or a Feature wrapping one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PolygonInput {
    Geometry(Polygon),
    Feature(PolygonFeature),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct PolygonFeature {
    pub geometry: Polygon,
}

impl From<PolygonInput> for Polygon {
    fn from(input: PolygonInput) -> Self {
        match input {
            PolygonInput::Geometry(polygon) => polygon,
            PolygonInput::Feature(feature) => feature.geometry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBundle {
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ago: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_str: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlBundle {
    pub viewer: String,
    pub editor: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_record_ignores_unknown_fields() {
        let json = serde_json::json!({
            "id": "https://annotations.allmaps.org/maps/m1",
            "type": "GeoreferencedMap",
            "updatedAt": "2024-03-01T12:00:00Z",
            "image": {
                "id": "i1",
                "uri": "https://example.org/iiif/i1",
                "width": 4000,
                "height": 3000
            },
            "gcps": []
        });

        let map: MapRecord = serde_json::from_value(json).unwrap();
        assert_eq!(map.updated_at.as_deref(), Some("2024-03-01T12:00:00Z"));
        assert_eq!(map.image.uri, "https://example.org/iiif/i1");
    }

    #[test]
    fn test_polygon_from_feature_or_geometry() {
        let geometry = serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
        });
        let feature = serde_json::json!({
            "type": "Feature",
            "properties": {},
            "geometry": geometry.clone()
        });

        let a: Polygon = serde_json::from_value::<PolygonInput>(geometry).unwrap().into();
        let b: Polygon = serde_json::from_value::<PolygonInput>(feature).unwrap().into();
        assert_eq!(a, b);
        assert_eq!(a.exterior().map(|r| r.len()), Some(4));
        assert!(a.holes().is_empty());
    }

    #[test]
    fn test_property_bundle_omits_missing_fields() {
        let bundle = PropertyBundle {
            hostname: "example.org".to_string(),
            time_ago: Some("2 hours ago".to_string()),
            area_str: None,
        };
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["timeAgo"], "2 hours ago");
        assert!(json.get("areaStr").is_none());
    }
}
