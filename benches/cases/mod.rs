pub mod compiling;
pub mod parsing;
