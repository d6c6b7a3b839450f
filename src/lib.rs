pub mod analysis;
pub mod dataset;
pub mod error;
pub mod explore;
pub mod model;
pub mod render;
pub mod selection;
pub mod xlsx;

pub use dataset::{load_dataset, Dataset, DeliverySchema};
pub use error::{InsightsError, Result};
pub use model::*;
