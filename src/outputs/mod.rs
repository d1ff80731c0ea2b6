//! Output generation for the published feed artifact.
//!
//! - [`rss`]: assembles the program list into an RSS 2.0 channel and writes
//!   it to the configured artifact path, fully overwriting any previous
//!   content. Every run republishes the complete list; there is no
//!   incremental merge.

pub mod rss;
