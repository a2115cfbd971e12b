pub mod category;
pub mod checksum;
pub mod dataset;
pub mod features;

pub use category::{classify, AqiBand, AQI_CATEGORIES};
pub use dataset::{Dataset, DatasetColumns, DatasetError, DatasetRecord};
pub use features::{FeatureError, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
