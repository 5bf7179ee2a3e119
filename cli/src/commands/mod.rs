//! CLI commands for the bytepair tokenizer.

pub mod decode;
pub mod encode;
pub mod train;
pub mod vocab;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use train::TrainCommand;
pub use vocab::VocabCommand;
