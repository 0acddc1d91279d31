//! WASM bindings for the constellation-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Arguments and results cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;
use serde_json::to_string;

use crate::constellation::{build_constellation, ConstellationConfig};
use crate::journal::{self, Draft, TagToggle, MAX_TAGS, TAG_OPTIONS};
use crate::layout::{self, LayoutConfig};
use crate::output::{ConstellationOutput, EntryOutput, ErrorInfo, TagToggleOutput};
use crate::store::{self, StarMap};
#[cfg(any(target_arch = "wasm32", test))]
use crate::store::{JournalRepository, KeyValueStore};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Malformed JSON handed in from JavaScript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    pub msg: String,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Input error: {}", self.msg)
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(what: &str, raw: &str) -> Result<T, InputError> {
    serde_json::from_str(raw).map_err(|e| InputError { msg: format!("invalid {}: {}", what, e) })
}

/// Empty or missing star maps are fine; anything else must parse.
fn parse_stars(raw: &str) -> Result<StarMap, InputError> {
    if raw.trim().is_empty() {
        return Ok(StarMap::new());
    }
    store::stars_from_json(raw).map_err(|e| InputError { msg: format!("invalid stars: {}", e) })
}

fn constellation_from_json(
    entries_json: &str,
    stars_json: &str,
    active_tag: &str,
) -> Result<ConstellationOutput, InputError> {
    let entries = journal::entries_from_json(entries_json)
        .map_err(|e| InputError { msg: format!("invalid entries: {}", e) })?;
    let stars = parse_stars(stars_json)?;
    Ok(build_constellation(entries, &stars, active_tag, &ConstellationConfig::default()))
}

/// Lay out the constellation for entries passed in from JS.
#[wasm_bindgen]
pub fn layout_constellation(entries_json: &str, stars_json: &str, active_tag: &str) -> String {
    let output = match constellation_from_json(entries_json, stars_json, active_tag) {
        Ok(output) => output,
        Err(e) => {
            console_error(&format!("Error building constellation: {}", e));
            ConstellationOutput::from_error(active_tag, e.msg)
        }
    };
    to_string(&output).unwrap_or_else(|_| "{}".to_string())
}

fn layout_from_json(ids_json: &str) -> Result<String, InputError> {
    let ids: Vec<String> = parse_json("ids", ids_json)?;
    let result = layout::layout_constellation(&ids, &LayoutConfig::default());
    to_string(&result).map_err(|e| InputError { msg: e.to_string() })
}

/// Raw layout for an ordered JSON array of ids.
/// Returns `{"placements": [...], "links": [...]}`.
#[wasm_bindgen]
pub fn compute_layout(ids_json: &str) -> String {
    match layout_from_json(ids_json) {
        Ok(json) => json,
        Err(e) => {
            console_error(&format!("Error computing layout: {}", e));
            "{\"placements\": [], \"links\": []}".to_string()
        }
    }
}

fn toggle_star_json(stars_json: &str, id: &str) -> Result<String, InputError> {
    let mut stars = parse_stars(stars_json)?;
    store::toggle_star(&mut stars, id);
    to_string(&stars).map_err(|e| InputError { msg: e.to_string() })
}

/// Flip the star flag for `id` and return the new map.
/// Returns the original map if it can't be parsed.
#[wasm_bindgen]
pub fn toggle_star(stars_json: &str, id: &str) -> String {
    match toggle_star_json(stars_json, id) {
        Ok(json) => json,
        Err(e) => {
            console_error(&format!("Error toggling star '{}': {}", id, e));
            stars_json.to_string()
        }
    }
}

/// Tag chips offered by the journal editor, as a JSON array.
#[wasm_bindgen]
pub fn journal_tag_options() -> String {
    to_string(&TAG_OPTIONS).unwrap_or_else(|_| "[]".to_string())
}

#[wasm_bindgen]
pub fn draft_word_count(content: &str) -> usize {
    Draft::new(content, vec![]).word_count()
}

#[wasm_bindgen]
pub fn entry_title(content: &str) -> String {
    journal::entry_title(content)
}

fn toggle_draft_tag_output(tags_json: &str, tag: &str) -> Result<TagToggleOutput, InputError> {
    let tags: Vec<String> = parse_json("tags", tags_json)?;
    let mut draft = Draft::new("", tags);
    let outcome = draft.toggle_tag(tag);
    let (label, toast) = match outcome {
        TagToggle::Added => ("added", None),
        TagToggle::Removed => ("removed", None),
        TagToggle::LimitReached => ("limit_reached", Some(format!("Pick up to {} tags.", MAX_TAGS))),
    };
    Ok(TagToggleOutput {
        limit_reached: draft.has_reached_tag_limit(),
        tags: draft.tags,
        outcome: label.to_string(),
        toast,
    })
}

/// Toggle a tag chip on the journal draft.
#[wasm_bindgen]
pub fn toggle_draft_tag(tags_json: &str, tag: &str) -> String {
    let output = match toggle_draft_tag_output(tags_json, tag) {
        Ok(output) => output,
        Err(e) => {
            console_error(&format!("Error toggling tag '{}': {}", tag, e));
            TagToggleOutput {
                tags: vec![],
                outcome: "error".to_string(),
                limit_reached: false,
                toast: None,
            }
        }
    };
    to_string(&output).unwrap_or_else(|_| "{}".to_string())
}

fn entry_error(message: impl Into<String>) -> EntryOutput {
    EntryOutput { entry: None, error: Some(ErrorInfo::new(message)) }
}

fn draft_from_json(content: &str, tags_json: &str) -> Result<Draft, InputError> {
    let tags: Vec<String> = if tags_json.trim().is_empty() {
        vec![]
    } else {
        parse_json("tags", tags_json)?
    };
    Ok(Draft::new(content, tags))
}

fn create_entry_output(content: &str, tags_json: &str) -> EntryOutput {
    let draft = match draft_from_json(content, tags_json) {
        Ok(draft) => draft,
        Err(e) => return entry_error(e.msg),
    };
    match draft.create_entry() {
        Ok(entry) => EntryOutput { entry: Some(entry), error: None },
        Err(e) => entry_error(e.msg),
    }
}

/// Build a new entry (fresh id + timestamp) from the editor state without
/// persisting it. The `error` field carries the toast text on failure.
#[wasm_bindgen]
pub fn create_journal_entry(content: &str, tags_json: &str) -> String {
    let output = create_entry_output(content, tags_json);
    to_string(&output).unwrap_or_else(|_| "{}".to_string())
}

// Persisted variants, generic over the store so they can run against memory.

#[cfg(any(target_arch = "wasm32", test))]
fn load_constellation_from<S: KeyValueStore>(repo: &JournalRepository<S>, active_tag: &str) -> ConstellationOutput {
    let entries = repo.load_entries();
    let stars = repo.load_stars();
    match (entries, stars) {
        (Ok(entries), Ok(stars)) => build_constellation(entries, &stars, active_tag, &ConstellationConfig::default()),
        (Err(e), _) | (_, Err(e)) => ConstellationOutput::from_error(active_tag, e.to_string()),
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn save_entry_to<S: KeyValueStore>(repo: &mut JournalRepository<S>, content: &str, tags_json: &str) -> EntryOutput {
    let output = create_entry_output(content, tags_json);
    let Some(entry) = output.entry.clone() else {
        return output;
    };
    match repo.save_entry(entry) {
        Ok(_) => output,
        Err(e) => entry_error(e.to_string()),
    }
}

#[cfg(target_arch = "wasm32")]
fn open_repository() -> Result<JournalRepository<store::LocalStorageStore>, store::StoreError> {
    store::LocalStorageStore::open().map(JournalRepository::new)
}

/// Constellation for the entries and stars kept in `localStorage`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn load_constellation(active_tag: &str) -> String {
    let output = match open_repository() {
        Ok(repo) => load_constellation_from(&repo, active_tag),
        Err(e) => {
            console_error(&format!("Error opening storage: {}", e));
            ConstellationOutput::from_error(active_tag, e.to_string())
        }
    };
    if let Some(err) = &output.error {
        console_error(&format!("Error loading constellation: {}", err.message));
    }
    to_string(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Journal entries kept in `localStorage`, newest first, as a JSON array.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn load_journal_entries() -> String {
    let entries = match open_repository().and_then(|repo| repo.load_entries()) {
        Ok(entries) => entries,
        Err(e) => {
            console_error(&format!("Error loading entries: {}", e));
            return "[]".to_string();
        }
    };
    to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}

/// Validate the draft, persist it at the top of the journal and return it.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn save_journal_entry(content: &str, tags_json: &str) -> String {
    let output = match open_repository() {
        Ok(mut repo) => save_entry_to(&mut repo, content, tags_json),
        Err(e) => entry_error(e.to_string()),
    };
    match &output.error {
        Some(err) => console_error(&format!("Entry not saved: {}", err.message)),
        None => console_log("Saved to journal."),
    }
    to_string(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Flip and persist the star flag for `id`; returns the new map.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn toggle_star_persisted(id: &str) -> String {
    match open_repository().and_then(|mut repo| repo.toggle_star(id)) {
        Ok(stars) => to_string(&stars).unwrap_or_else(|_| "{}".to_string()),
        Err(e) => {
            console_error(&format!("Error toggling star '{}': {}", id, e));
            "{}".to_string()
        }
    }
}
