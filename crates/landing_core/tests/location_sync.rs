use landing_core::{update, AppState, Effect, Msg, QueryField, SearchOutcome, SearchQuery};
use pretty_assertions::assert_eq;

fn init_logging() {
    landing_logging::initialize_for_tests();
}

#[test]
fn location_filters_trigger_search_on_mount() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::LocationChanged("?term=foo&year=2020".to_string()),
    );

    let expected = SearchQuery::new("foo").with(QueryField::Year, "2020");
    assert_eq!(state.form(), &expected);
    assert_eq!(
        effects,
        vec![
            Effect::ReplaceLocation {
                query: "term=foo&year=2020".to_string(),
            },
            Effect::RunSearch {
                seq: 1,
                query: "term=foo&year=2020".to_string(),
            },
        ]
    );
    assert!(state.search().is_searching);
}

#[test]
fn empty_location_is_noop() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::LocationChanged(String::new()));

    assert!(effects.is_empty());
    assert!(!state.search().has_searched);
    assert_eq!(state.latest_seq(), 0);
}

#[test]
fn unrecognized_keys_alone_do_not_search() {
    init_logging();
    let (_state, effects) = update(
        AppState::new(),
        Msg::LocationChanged("page=3&sort=new&domain=".to_string()),
    );

    assert!(effects.is_empty());
}

#[test]
fn location_is_rewritten_in_canonical_form() {
    init_logging();
    let (_state, effects) = update(
        AppState::new(),
        Msg::LocationChanged("region=apac&ref=home&tag=&term=edge+cache".to_string()),
    );

    assert_eq!(
        effects[0],
        Effect::ReplaceLocation {
            query: "term=edge+cache&region=apac".to_string(),
        }
    );
}

#[test]
fn returning_to_same_query_searches_again() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LocationChanged("term=a".to_string()));
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            seq: 1,
            outcome: SearchOutcome::Failed,
        },
    );
    let (state, effects) = update(state, Msg::LocationChanged(String::new()));
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::LocationChanged("?term=a".to_string()));
    assert_eq!(
        effects,
        vec![
            Effect::ReplaceLocation {
                query: "term=a".to_string(),
            },
            Effect::RunSearch {
                seq: 2,
                query: "term=a".to_string(),
            },
        ]
    );
    assert_eq!(state.latest_seq(), 2);
    assert!(state.search().is_searching);
    assert_eq!(state.search().error, None);
}

#[test]
fn navigation_to_different_filters_searches_again() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LocationChanged("term=a".to_string()));
    let (state, effects) = update(state, Msg::LocationChanged("term=a&tag=b".to_string()));

    assert_eq!(
        effects[1],
        Effect::RunSearch {
            seq: 2,
            query: "term=a&tag=b".to_string(),
        }
    );
    assert_eq!(state.form().tag.as_deref(), Some("b"));
}

#[test]
fn query_string_never_contains_empty_pairs() {
    let fields = [
        QueryField::Domain,
        QueryField::Tag,
        QueryField::Year,
        QueryField::Region,
    ];
    // Every subset of filters, each either filled, empty or whitespace.
    for mask in 0..3u32.pow(fields.len() as u32) {
        let mut query = SearchQuery::new("term");
        let mut rest = mask;
        for field in fields {
            match rest % 3 {
                0 => {}
                1 => query.set(field, ""),
                _ => query.set(field, "x"),
            }
            rest /= 3;
        }

        let encoded = query.to_query_string();
        for pair in encoded.split('&') {
            assert!(!pair.ends_with('='), "empty pair in {encoded}");
        }
        assert_eq!(SearchQuery::from_query_string(&encoded), query);
    }
}
