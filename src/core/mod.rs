pub mod area_series;
pub mod scale;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use area_series::{AreaGeometry, AreaVertex, project_area_geometry};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use types::{Margin, StockPoint, Viewport, datetime_to_unix_seconds, validate_series};
pub use value_scale::ValueScale;
