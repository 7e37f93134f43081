//! GP catalog access and the tracking pipeline that feeds the dashboard's globe view.

pub mod load;
pub mod query;
pub mod record;
pub mod settings;
pub mod track;

pub use load::{CatalogError, load_gp_records};
pub use query::{CatalogQuery, ObjectTypeFilter};
pub use record::{GpRecord, RecordError};
pub use settings::position_options;
pub use track::{
    ObjectMetadata, ObjectTypeCounts, OrbitSummary, SkipReason, SkippedObject, TrackedObject,
    TrackingReport, track, track_record,
};
