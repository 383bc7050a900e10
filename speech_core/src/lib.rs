mod chunk;
mod pacer;
mod segment;

pub use chunk::chunk_sentences;
pub use pacer::{SpeechPacer, SpeechSink, DEFAULT_CHARS_PER_SEC, DEFAULT_MAX_CHUNK_CHARS};
pub use segment::{split_sentences, truncate_to_last_sentence};
