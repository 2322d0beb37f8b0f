// Brazilian formatting and collection helpers.
//
// Everything in here is a plain function over its arguments: no state is kept
// between calls. Malformed input produces a neutral value ("", "R$ 0,00", 0,
// an empty Vec) instead of an error; the `try_*`/`parse_*` entry points are
// the strict variants for callers that want to know why.

pub mod arrays;
pub mod collation;
pub mod dom;
pub mod error;
pub mod formatters;
pub mod objects;
pub mod settings;
pub mod states;

pub use error::{KitError, Result};
pub use settings::FormatSettings;
