pub mod edges;
pub mod lexicon;
pub mod ranking;
pub mod sentences;
pub mod signature;
pub mod structure;
pub mod tone;
pub mod transition;
pub mod vocabulary;

pub use edges::{extract_closing_patterns, extract_opening_patterns};
pub use ranking::FrequencyTable;
pub use sentences::{analyze_paragraphs, analyze_sentences, representative_sentences};
pub use signature::extract_signature_phrases;
pub use structure::analyze_structure;
pub use tone::analyze_tone;
pub use transition::analyze_transitions;
pub use vocabulary::analyze_vocabulary;
