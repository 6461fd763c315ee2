//! Library catalog: validated MP3 files in the order the user added them.

mod catalog;
mod model;
mod probe;
mod scan;

pub use catalog::{AddReport, Catalog};
pub use model::{Track, display_name_for};
pub use probe::{LoftyReader, MetadataReader};
pub use scan::expand_paths;

#[cfg(test)]
pub(crate) mod testing;
