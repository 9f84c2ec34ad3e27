//! Query String Multimap.
//!
//! Decode `application/x-www-form-urlencoded` style query string, e.g: `bar=baz&foo=quux`, into
//! [`Values`], and encode it back.
use bytes::Bytes;
use std::collections::HashMap;

mod map;
mod parser;


pub use parser::{parse_query, parse_query_from};

/// Query values multimap.
///
/// Maps a key to a list of values. Keys are case-sensitive. Values of each key keeps its
/// insertion order, keys are only ordered when [encoded][Values::encode].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    map: HashMap<Bytes, Vec<Bytes>>,
}
