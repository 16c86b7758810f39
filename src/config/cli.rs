use crate::domain::model::{MapRecord, Polygon, PolygonInput};
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Reads the JSON inputs the CLI works on from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalInput;

impl LocalInput {
    pub fn read_map<P: AsRef<Path>>(&self, path: P) -> Result<MapRecord> {
        let data = fs::read(path.as_ref())?;
        let map = serde_json::from_slice(&data)?;
        Ok(map)
    }

    /// Accepts a Polygon geometry or a Feature wrapping one.
    pub fn read_polygon<P: AsRef<Path>>(&self, path: P) -> Result<Polygon> {
        let data = fs::read(path.as_ref())?;
        let input: PolygonInput = serde_json::from_slice(&data)?;
        Ok(input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MapPropsError;
    use tempfile::TempDir;

    #[test]
    fn test_read_map_and_polygon() {
        let dir = TempDir::new().unwrap();
        let map_path = dir.path().join("map.json");
        let polygon_path = dir.path().join("polygon.geojson");

        fs::write(
            &map_path,
            r#"{"id":"m1","updatedAt":"2024-01-01T00:00:00Z","image":{"id":"i1","uri":"https://example.org/iiif/i1"}}"#,
        )
        .unwrap();
        fs::write(
            &polygon_path,
            r#"{"type":"Feature","properties":null,"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}"#,
        )
        .unwrap();

        let input = LocalInput;
        let map = input.read_map(&map_path).unwrap();
        let polygon = input.read_polygon(&polygon_path).unwrap();

        assert_eq!(map.id, "m1");
        assert_eq!(polygon.coordinates[0].len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = LocalInput.read_map(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, MapPropsError::IoError(_)));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.json");
        fs::write(&path, "{ not json").unwrap();

        let err = LocalInput.read_map(&path).unwrap_err();
        assert!(matches!(err, MapPropsError::SerializationError(_)));
    }
}
