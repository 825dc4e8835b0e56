// Plagiarism checking — split an article into snippets, search each one,
// fetch the top results and score word overlap against them.
//
// snippets and similarity are pure and synchronous; checker owns the
// sequential, paced network orchestration around them.

pub mod checker;
pub mod report;
pub mod similarity;
pub mod snippets;
