pub mod block;
pub mod block_option;
pub mod question;

pub use block::{Block, BlockType};
pub use block_option::{BlockOption, Prefix};
pub use question::{Question, Span};
