//! Conversion core: field lookup, aggregation, column planning, composition.

pub mod aggregate;
pub mod composer;
pub mod convert;
pub mod fields;
pub mod normalize;
pub mod planner;
pub mod progress;
pub mod roster;

pub use convert::{Conversion, ConversionRequest, ConvertLogic};
pub use progress::{ConsoleSink, LogCollector, NullSink, ProgressSink};
