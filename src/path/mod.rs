mod error;
mod normalize;

pub use error::{PathError, PathResult};
pub use normalize::{NormalizationOptions, SegmentList, normalize_path, split_segments};
