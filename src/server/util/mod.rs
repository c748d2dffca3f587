pub mod document;
pub mod parse;
