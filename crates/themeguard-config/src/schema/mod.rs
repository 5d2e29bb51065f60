//! Theme settings schema.
//!
//! Every section and field is optional. An absent value means "no change
//! requested", never "clear the stored value", so absent fields are skipped
//! on serialization as well.

mod colors;
mod fonts;
mod settings;
mod toggles;

pub use colors::*;
pub use fonts::*;
pub use settings::*;
pub use toggles::*;
