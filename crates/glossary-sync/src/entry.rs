/// Identifier of the glossary container rows are imported into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlossaryHandle(i64);

impl GlossaryHandle {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for GlossaryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user recorded as the editor of imported rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(i64);

impl ActorId {
    /// Used when no authenticated user and no administrator exists.
    pub const FALLBACK: ActorId = ActorId(1);

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One glossary row as it is stored locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: String,
    pub translation: String,
    pub part_of_speech: String,
    pub comment: String,
    pub locale: String,
}

impl GlossaryEntry {
    /// A row needs at least a term and a translation to be worth keeping.
    pub fn is_valid(&self) -> bool {
        !self.term.trim().is_empty() && !self.translation.trim().is_empty()
    }

    /// Duplicate detection compares every imported column, not just the term.
    pub fn is_duplicate_of(&self, other: &GlossaryEntry) -> bool {
        self.term == other.term
            && self.translation == other.translation
            && self.part_of_speech == other.part_of_speech
            && self.comment == other.comment
    }
}
