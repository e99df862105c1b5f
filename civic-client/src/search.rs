//! Text search over in-memory lists
//!
//! Matching is case-insensitive. An empty (or blank) query matches
//! everything.

use serde::Serialize;

/// Largest edit distance still counted as a fuzzy match
pub const MAX_FUZZY_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMethod {
    #[default]
    Simple,
    Fuzzy,
}

/// Edit distance between `a` and `b`, counted in chars
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn fuzzy_match(query: &str, text: &str) -> Option<usize> {
    let distance = levenshtein(query, text);
    (distance <= MAX_FUZZY_DISTANCE || text.contains(query)).then_some(distance)
}

/// Items whose field contains the query
pub fn simple_search<'a, T, F>(items: &'a [T], query: &str, field: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| field(item).to_lowercase().contains(&query))
        .collect()
}

/// Items within [`MAX_FUZZY_DISTANCE`] edits of the query, or containing it
///
/// Exact matches come first, then by increasing distance; ties keep
/// their input order.
pub fn fuzzy_search<'a, T, F>(items: &'a [T], query: &str, field: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.iter().collect();
    }
    let mut scored: Vec<(bool, usize, &T)> = items
        .iter()
        .filter_map(|item| {
            let text = field(item).to_lowercase();
            fuzzy_match(&query, &text).map(|d| (text != query, d, item))
        })
        .collect();
    scored.sort_by_key(|(inexact, distance, _)| (*inexact, *distance));
    scored.into_iter().map(|(_, _, item)| item).collect()
}

/// Items where any of the given fields matches
pub fn multi_field_search<'a, T, F>(
    items: &'a [T],
    query: &str,
    fields: F,
    method: SearchMethod,
) -> Vec<&'a T>
where
    F: Fn(&T) -> Vec<&str>,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            fields(item).into_iter().any(|value| {
                let value = value.to_lowercase();
                match method {
                    SearchMethod::Simple => value.contains(&query),
                    SearchMethod::Fuzzy => fuzzy_match(&query, &value).is_some(),
                }
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub current_page: usize,
}

/// One 1-based page of `items`; page 0 is treated as page 1
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    if page_size == 0 {
        return Page {
            items: Vec::new(),
            total_pages: 0,
            current_page: page,
        };
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        total_pages: items.len().div_ceil(page_size),
        current_page: page,
    }
}
