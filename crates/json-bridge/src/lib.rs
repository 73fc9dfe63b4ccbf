//! json-bridge — typed views over an untyped JSON tree.
//!
//! Text is parsed with `serde_json` and lowered into a [`Node`] tree whose
//! arrays and objects are shared handles. [`JsonObject`] and [`JsonArray`]
//! are views over those handles: typed getters and setters, generic list
//! builders, and the [`JsonSerialize`]/[`JsonDeserialize`] contracts that
//! let application types convert themselves to and from the tree.
//!
//! The whole boundary most callers need is four functions:
//!
//! ```
//! use json_bridge::{deserialize, serialize, JsonDeserialize, JsonObject, JsonSerialize, Result};
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Window {
//!     title: String,
//!     width: i32,
//! }
//!
//! impl JsonSerialize for Window {
//!     fn write_json(&self, object: &mut JsonObject) {
//!         object.set_string("title", self.title.as_str());
//!         object.set_int("width", self.width);
//!     }
//! }
//!
//! impl JsonDeserialize for Window {
//!     fn read_json(&mut self, object: &JsonObject) -> Result<()> {
//!         self.title = object.get_string("title", "")?;
//!         self.width = object.get_int("width", 0)?;
//!         Ok(())
//!     }
//! }
//!
//! let window = Window { title: "main".into(), width: 640 };
//! let text = serialize(&window).to_json_string().unwrap();
//! let mut back = Window::default();
//! deserialize(&text, &mut back).unwrap();
//! assert_eq!(back, window);
//! ```
//!
//! Views are `Rc`-based and therefore single-threaded.

mod array;
mod contract;
mod error;
mod node;
mod object;
mod primitive;

pub use array::JsonArray;
pub use contract::{JsonDeserialize, JsonSerialize};
pub use error::{JsonError, Result};
pub use node::Node;
pub use object::JsonObject;
pub use primitive::JsonPrimitive;

/// Parses a document whose top level is an object.
pub fn parse(text: &str) -> Result<JsonObject> {
    JsonObject::parse(text)
}

/// Writes `writer` into a fresh object.
pub fn serialize<W: JsonSerialize + ?Sized>(writer: &W) -> JsonObject {
    JsonObject::serialized(writer)
}

/// Parses `text` and populates `reader` from it in place.
pub fn deserialize<R: JsonDeserialize + ?Sized>(text: &str, reader: &mut R) -> Result<()> {
    JsonObject::fill_object(text, Some(reader))
}
