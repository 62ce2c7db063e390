mod parse_fragment;
mod parse_output_doc;
mod parsed_document;
mod patterns;

pub use self::{parse_fragment::*, parse_output_doc::*, parsed_document::*, patterns::*};
