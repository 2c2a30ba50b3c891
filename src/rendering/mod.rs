pub mod codec;

pub use codec::{encode_png, load_rgba, optimize_png, write_png};
