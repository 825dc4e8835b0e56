// Route handlers, one file per tool.

pub mod keywords;
pub mod plagiarism;
pub mod text;
