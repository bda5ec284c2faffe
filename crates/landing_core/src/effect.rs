#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the current location entry's query. Never pushes a history
    /// entry and never scrolls.
    ReplaceLocation { query: String },
    /// Issue one request to the search endpoint.
    RunSearch { seq: crate::SearchSeq, query: String },
}
