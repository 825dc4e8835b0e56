// Page content fetching — the fetcher trait and the HTTP implementation
// that turns a result page into plain text for similarity scoring.

pub mod html;
pub mod http;
pub mod traits;
