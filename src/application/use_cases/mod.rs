mod ask;

pub use ask::*;
