pub mod algorithms;
pub mod display;
pub mod error;
pub mod extract;
pub mod potd;
pub mod telemetry;

pub use error::FetchError;
pub use potd::{ProblemFetcher, ProblemFetcherBuilder, ProblemRecord, Source, SourceKind};
