pub mod io;
pub mod rgba;
pub mod sampler;

pub use self::io::decode_rgba;
pub use self::rgba::{ImageRgba8, RgbaBuffer};
pub use self::sampler::Region;
