pub mod encode;
pub mod escape;
pub mod patch;

pub use encode::{DataKind, encode_integer, encode_string, parse_decimal};
pub use escape::decode_escapes;
pub use patch::{PatchError, patch_in_place};
