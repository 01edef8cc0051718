//! Upload processing: text extraction followed by the model pass

mod adapter;

pub use adapter::ExtractionAdapter;
