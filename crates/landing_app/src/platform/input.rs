use landing_core::{Msg, QueryField};

/// Something the user did at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppEvent {
    Core(Msg),
    /// Typed a new location query, like editing the address bar.
    Navigate(String),
    Back,
    Help,
    Unknown(String),
    Quit,
}

pub(crate) const HELP: &str = "\
  <text>            search for <text> with the current filters
  /term <text>      set the search text without searching
  /domain <value>   set or clear (no value) the domain filter
  /tag <value>      set or clear the tag filter
  /year <value>     set or clear the year filter
  /region <value>   set or clear the region filter
  /search           search with the current form
  /clear            clear every form field
  /go <query>       navigate to a location query, e.g. /go ?term=rust&year=2020
  /back             go back one history entry
  /quit             leave";

/// Translates one input line into events; blank lines yield nothing.
pub(crate) fn parse_line(line: &str) -> Vec<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    let Some(command) = line.strip_prefix('/') else {
        return vec![
            AppEvent::Core(Msg::FieldEdited {
                field: QueryField::Term,
                value: line.to_string(),
            }),
            AppEvent::Core(Msg::SearchSubmitted),
        ];
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    let event = match name {
        "quit" | "q" => AppEvent::Quit,
        "help" | "h" => AppEvent::Help,
        "search" => AppEvent::Core(Msg::SearchSubmitted),
        "clear" => AppEvent::Core(Msg::FormCleared),
        "go" => AppEvent::Navigate(arg.to_string()),
        "back" => AppEvent::Back,
        other => match QueryField::from_key(other) {
            Some(field) => AppEvent::Core(Msg::FieldEdited {
                field,
                value: arg.to_string(),
            }),
            None => AppEvent::Unknown(other.to_string()),
        },
    };
    vec![event]
}
