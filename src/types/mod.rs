mod common;

pub use common::{Language, RequestOptions, UnknownLanguage};
