use landing_core::{LandingViewModel, PostSummary, QueryField, SearchQuery, SearchResult, ViewMode};

use super::constants::*;
use super::layout::{boxed, centered, rule, wrap};

/// Renders the whole page for the current view model and location.
pub fn render(view: &LandingViewModel, href: &str) -> Vec<String> {
    let mut lines = vec![format!("{SITE_TITLE}  <{href}>"), rule(PAGE_WIDTH)];

    match view.mode {
        ViewMode::EmptySearch => render_centered_search(&mut lines, &view.form),
        ViewMode::Results | ViewMode::ResultsEmptyFallthrough => {
            render_compact_search(&mut lines, view)
        }
    }

    if view.show_intro {
        lines.push(String::new());
        render_intro(&mut lines, view);
    }
    lines
}

fn render_centered_search(lines: &mut Vec<String>, form: &SearchQuery) {
    lines.push(String::new());
    lines.push(centered(SEARCH_PROMPT, PAGE_WIDTH));
    let input = match form_summary(form) {
        Some(summary) => format!("> {summary}"),
        None => "> ".to_string(),
    };
    lines.extend(boxed(&[input], SEARCH_BOX_WIDTH, PAGE_WIDTH));
    lines.push(centered(SEARCH_HINT, PAGE_WIDTH));
}

fn render_compact_search(lines: &mut Vec<String>, view: &LandingViewModel) {
    let summary = form_summary(&view.form).unwrap_or_default();
    lines.push(format!("search> {summary}"));

    if view.is_searching {
        lines.push(SEARCHING_LABEL.to_string());
        return;
    }
    if let Some(error) = &view.error {
        lines.push(format!("! {error}"));
        return;
    }
    if view.results.is_empty() {
        lines.push("No results.".to_string());
        return;
    }

    let noun = if view.results.len() == 1 { "result" } else { "results" };
    lines.push(format!("{} {}", view.results.len(), noun));
    for (index, result) in view.results.iter().enumerate() {
        lines.extend(format_result(index + 1, result));
    }
}

fn render_intro(lines: &mut Vec<String>, view: &LandingViewModel) {
    lines.push(INTRO_TITLE.to_string());
    lines.extend(wrap(INTRO_BODY, PAGE_WIDTH));
    lines.push(format_counts(view));

    if view.recent_posts.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(RECENT_POSTS_TITLE.to_string());
    lines.extend(view.recent_posts.iter().map(format_post));
}

fn form_summary(form: &SearchQuery) -> Option<String> {
    let parts: Vec<String> = QueryField::ALL
        .into_iter()
        .filter_map(|field| {
            form.get(field).map(|value| match field {
                QueryField::Term => value.to_string(),
                _ => format!("{}:{}", field.key(), value),
            })
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn format_result(number: usize, result: &SearchResult) -> Vec<String> {
    let title = result.title().unwrap_or("(untitled)");
    let mut out = vec![match result.link() {
        Some(link) => format!("{number:>2}. {title} <{link}>"),
        None => format!("{number:>2}. {title}"),
    }];
    if let Some(summary) = result.summary() {
        out.extend(
            wrap(summary, PAGE_WIDTH - 4)
                .into_iter()
                .map(|line| format!("    {line}")),
        );
    }
    out
}

fn format_post(post: &PostSummary) -> String {
    match &post.date {
        Some(date) => format!("  {date}  {}", post.title),
        None => format!("  {}", post.title),
    }
}

fn format_counts(view: &LandingViewModel) -> String {
    let projects = plural(view.project_count, "project", "projects");
    let posts = plural(view.post_count, "post", "posts");
    if view.collection_count > 0 {
        let collections = plural(view.collection_count, "collection", "collections");
        format!("{projects} in {collections}, {posts}")
    } else {
        format!("{projects}, {posts}")
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}
