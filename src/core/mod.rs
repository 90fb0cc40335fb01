pub mod field;
pub mod text_edit;
pub mod validation;

pub use field::{Field, FieldKind, FormSnapshot};
pub use text_edit::TextBuffer;
pub use validation::{FormReport, shows_error, validate, validate_form};
