pub const PAGE_WIDTH: usize = 72;
pub const SEARCH_BOX_WIDTH: usize = 48;

pub const SITE_TITLE: &str = "field notes";
pub const SEARCH_PROMPT: &str = "Search posts and projects";
pub const SEARCH_HINT: &str = "Type to search, /help for filters";
pub const SEARCHING_LABEL: &str = "Searching...";

pub const INTRO_TITLE: &str = "Hello, and welcome";
pub const INTRO_BODY: &str = "Notes on building small, dependable software: \
write-ups of side projects, the occasional deep dive, and whatever broke in \
production this month.";
pub const RECENT_POSTS_TITLE: &str = "Recent posts";
