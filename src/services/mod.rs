// Nimbus services
// Stateless or load-once functionality: URL normalization and settings.

pub mod settings_engine;
pub mod url_normalizer;
