pub mod interface;
pub mod keyword;

pub use interface::{DetectionRequest, DetectionResponse, LanguageDetector};
pub use keyword::KeywordDetector;
