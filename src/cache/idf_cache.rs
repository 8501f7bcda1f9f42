// Opt-in memoization. Nothing in the crate uses it unless the caller passes
// one in; the plain entry points always rebuild IDF from scratch.

use tracing::trace;

use crate::conversation::Message;
use crate::scoring::IdfMap;
use crate::types::identifiers::ConversationVersion;

/// Single-slot IDF memo keyed by [`ConversationVersion`].
///
/// Keep one per conversation. The version is recomputed on every lookup, so
/// an edit, star toggle, insertion or removal made anywhere invalidates the
/// stored map.
#[derive(Debug, Default)]
pub struct IdfCache {
    entry: Option<(ConversationVersion, IdfMap)>,
    hits: u64,
    misses: u64,
}

impl IdfCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// IDF over the regular messages of `conversation`.
    pub fn idf_for(&mut self, conversation: &[Message]) -> &IdfMap {
        let version = ConversationVersion::from_messages(conversation);

        let entry = match self.entry.take() {
            Some((cached, idf)) if cached == version => {
                self.hits += 1;
                trace!(version = cached.as_str(), "idf cache hit");
                (cached, idf)
            }
            _ => {
                self.misses += 1;
                trace!(version = version.as_str(), "idf cache miss");
                let idf = IdfMap::for_regular(conversation);
                (version, idf)
            }
        };

        let (_, idf) = self.entry.insert(entry);
        idf
    }

    pub fn version(&self) -> Option<&ConversationVersion> {
        self.entry.as_ref().map(|(version, _)| version)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
