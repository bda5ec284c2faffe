#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Location query string on mount, or after the user navigated.
    LocationChanged(String),
    /// User edited one field of the search form.
    FieldEdited {
        field: crate::QueryField,
        value: String,
    },
    /// User reset every form field.
    FormCleared,
    /// User submitted the search form.
    SearchSubmitted,
    /// Engine completion for a search request.
    SearchCompleted {
        seq: crate::SearchSeq,
        outcome: crate::SearchOutcome,
    },
    /// Static project and post listings became available.
    ContentLoaded(crate::ContentCatalog),
    /// Fallback for placeholder wiring.
    NoOp,
}
