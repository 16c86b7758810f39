pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalInput, links::LinkEndpoints, toml_config::TomlConfig};
pub use crate::core::{
    area::{format_area, geodesic_area},
    clock::{FixedClock, SystemClock},
    number_format::format_decimal,
    properties::{get_properties, PropertyDeriver},
    relative_time::EnglishRelativeTime,
    time_ago::format_time_ago,
    urls::{get_urls, UrlBuilder},
};
pub use crate::domain::model::{ImageRef, MapRecord, Polygon, PropertyBundle, UrlBundle};
pub use crate::utils::error::{MapPropsError, Result};
