// Resume review engine
// Implements: skill extraction, text signals, score composition, suggestions,
// plus the PDF ingest and HTTP handlers that expose it.
// Everything below `engine` is pure; only `ingest` and `handlers` touch I/O.

pub mod engine;
pub mod handlers;
pub mod ingest;
pub mod scoring;
pub mod signals;
pub mod skills;
pub mod suggestions;
pub mod vocabulary;
