use crate::core::area::{format_area, geodesic_area};
use crate::core::clock::SystemClock;
use crate::core::relative_time::EnglishRelativeTime;
use crate::core::time_ago::{format_time_ago, parse_timestamp};
use crate::domain::model::{MapRecord, Polygon, PropertyBundle};
use crate::domain::ports::{Clock, RelativeTimeFormatter};
use crate::utils::error::{MapPropsError, Result};
use url::Url;

/// Derives the summary shown next to a map: source host, age and footprint.
pub struct PropertyDeriver<C: Clock = SystemClock, F: RelativeTimeFormatter = EnglishRelativeTime> {
    clock: C,
    formatter: F,
}

impl<C: Clock, F: RelativeTimeFormatter> PropertyDeriver<C, F> {
    pub fn new(clock: C, formatter: F) -> Self {
        Self { clock, formatter }
    }

    pub fn derive(&self, map: &MapRecord, polygon: Option<&Polygon>) -> Result<PropertyBundle> {
        let hostname = hostname(&map.image.uri)?;
        let time_ago = self.time_ago(map)?;

        let area_str = polygon.map(|polygon| {
            let square_metres = geodesic_area(polygon);
            tracing::debug!(map_id = %map.id, square_metres, "computed map footprint");
            format_area(square_metres)
        });

        Ok(PropertyBundle {
            hostname,
            time_ago,
            area_str,
        })
    }

    fn time_ago(&self, map: &MapRecord) -> Result<Option<String>> {
        let Some(updated_at) = map.updated_at.as_deref() else {
            tracing::debug!(map_id = %map.id, "map has no updatedAt");
            return Ok(None);
        };

        let date = parse_timestamp(updated_at)?;
        Ok(format_time_ago(date, self.clock.now(), &self.formatter))
    }
}

impl Default for PropertyDeriver {
    fn default() -> Self {
        Self::new(SystemClock, EnglishRelativeTime)
    }
}

/// Host component of an absolute URL. URLs without a host (`urn:...`) give "".
pub fn hostname(uri: &str) -> Result<String> {
    let url = Url::parse(uri).map_err(|source| MapPropsError::MalformedUri {
        uri: uri.to_string(),
        source,
    })?;
    Ok(url.host_str().unwrap_or_default().to_string())
}

/// `PropertyDeriver::default().derive(..)`.
pub fn get_properties(map: &MapRecord, polygon: Option<&Polygon>) -> Result<PropertyBundle> {
    PropertyDeriver::<SystemClock, EnglishRelativeTime>::default().derive(map, polygon)
}
