pub mod area;
pub mod clock;
pub mod number_format;
pub mod properties;
pub mod relative_time;
pub mod time_ago;
pub mod urls;

pub use crate::domain::model::{MapRecord, Polygon, PropertyBundle, UrlBundle};
pub use crate::domain::ports::{Clock, LinkConfig, RelativeTimeFormatter, TimeUnit};
pub use crate::utils::error::Result;
