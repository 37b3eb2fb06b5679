pub mod factory;
pub mod google;
pub mod interface;
pub mod mock;

pub use factory::TranslatorFactory;
pub use google::GoogleTranslator;
pub use interface::{TranslationProvider, TranslationRequest, TranslationResponse};
pub use mock::MockTranslator;
