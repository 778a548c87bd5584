//! Save format: scene <-> JSON.
//!
//! Wire shape (field names are fixed by existing save files):
//!
//! ```json
//! { "shapesList": [
//!     { "type": "point",  "position": [x, y], "color": [r, g, b, a], "size": 5 },
//!     { "type": "circle", "position": [x, y], "color": [r, g, b, a], "size": 0.1, "segments": 8 }
//! ] }
//! ```
//!
//! Loading is deliberately asymmetric: an empty `shapesList` is rejected even
//! though an empty in-memory scene is fine, while entries with an unknown
//! `type` or unreadable fields are dropped one by one under
//! [`LoadPolicy::Lenient`].

mod codec;
mod error;
mod file;
mod record;

pub use codec::{decode_record, deserialize, parse_save, serialize, to_json};
pub use error::LoadError;
pub use file::{SAVE_FILE_NAME, SAVE_MIME, load_file, read_save_text, write_save};
pub use record::{SaveRecord, SerializedShape};

/// How to treat entries with an unknown `type` tag or unreadable fields.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LoadPolicy {
    /// Skip the entry and keep loading.
    #[default]
    Lenient,
    /// Fail the whole load.
    Strict,
}
