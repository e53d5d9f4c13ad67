//! Message model — the typed input contract.
//!
//! The caller's introspection layer describes each record as an ordered list
//! of fields: a marker-prefixed name, a declared type descriptor, and the
//! current runtime value. The converter only reads this model.

mod descriptor;
mod message;
mod value;

pub use descriptor::{FieldDescriptor, TypeDescriptor};
pub use message::Message;
pub use value::{FieldValue, NumericSeq, TimeValue};
