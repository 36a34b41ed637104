//! CLI command implementations for exemplar operations.
//!
//! Each submodule handles a specific command with its configuration and
//! execution logic:
//! - **typical**: rank corpus files by typicality
//! - **representative**: partition the corpus around its typical files
//! - **segments**: inspect one file's segmentation graph and blacklist
//! - **init**: initialize a new exemplar configuration file

pub mod corpus;
pub mod init;
pub mod representative;
pub mod segments;
pub mod typical;

pub use corpus::{build_documents, CorpusOptions};
pub use init::init_config;
pub use representative::{run_representative, RepresentativeConfig};
pub use segments::{run_segments, SegmentsConfig};
pub use typical::{run_typical, TypicalConfig};
