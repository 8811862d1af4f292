pub mod environment;
pub mod terminal;

pub use environment::{pattern_dir, pattern_dir_in};
pub use terminal::stdin_is_pipe;
