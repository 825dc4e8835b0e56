// Keyword research — n-gram density extraction over search results, and the
// cache-first research flow that wraps it.

pub mod density;
pub mod research;
pub mod stopwords;
pub mod traits;
