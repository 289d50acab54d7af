pub mod collection;
pub mod error;
pub mod json;
pub mod list;
pub mod map;
pub mod render;
pub mod tag;
pub mod value;
pub mod variant;

pub use error::VariantError;
pub use list::VariantList;
pub use map::VariantMap;
pub use tag::{classify, TypeTag};
pub use value::{Array, ArrayKey, Callable, Map, Object, Resource, Set, Value};
pub use variant::Variant;
