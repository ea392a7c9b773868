//! Report rendering adapters

pub mod markdown;

pub use markdown::MarkdownReportRenderer;
