pub mod document_store;
pub mod extractor;
pub mod glossator;
pub mod summarizer;
pub mod summary_store;

pub use document_store::{DocumentStore, JsonlDocumentStore, NoopDocumentStore};
pub use extractor::ContentExtractor;
pub use glossator::Glossator;
pub use summarizer::Summarizer;
pub use summary_store::{NoopSummaryStore, SummaryStore, SupabaseSummaryStore};
