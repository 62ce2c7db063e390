mod merged_bag;
mod version_heading;
mod write_document;

pub use self::{merged_bag::*, version_heading::*, write_document::*};
