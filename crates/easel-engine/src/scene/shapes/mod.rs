pub(crate) mod circle;
pub(crate) mod point;
pub(crate) mod triangle;

pub use circle::Circle;
pub use point::Point;
pub use triangle::Triangle;
