use crate::{AppState, Effect, Msg, SearchQuery};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LocationChanged(raw) => {
            let query = SearchQuery::from_query_string(&raw);
            let has_filters = !query.is_blank();
            state.set_location_has_filters(has_filters);
            *state.form_mut() = query.clone();
            state.mark_dirty();

            if !has_filters {
                return (state, Vec::new());
            }
            state.start_search(&query)
        }
        Msg::FieldEdited { field, value } => {
            state.form_mut().set(field, value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FormCleared => {
            *state.form_mut() = SearchQuery::default();
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let query = state.form().clone();
            if query.is_blank() {
                return (state, Vec::new());
            }
            state.start_search(&query)
        }
        Msg::SearchCompleted { seq, outcome } => {
            state.apply_completion(seq, outcome);
            Vec::new()
        }
        Msg::ContentLoaded(catalog) => {
            state.set_catalog(catalog);
            state.mark_dirty();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
