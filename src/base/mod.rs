mod cursor;
mod range;

pub use self::cursor::Cursor;
pub use self::range::Range;
