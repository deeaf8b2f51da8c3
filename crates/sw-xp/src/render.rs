//! Rendering the tracker status into a page element.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::XpResult;
use crate::store::KeyValueStore;
use crate::tracker::XpTracker;

/// Element id used when none is given.
pub const DEFAULT_ELEMENT_ID: &str = "xpDisplay";

/// Something whose displayed text can be replaced.
pub trait TextElement {
    /// Replace the element's text.
    fn set_text_content(&mut self, text: &str);
}

impl TextElement for String {
    fn set_text_content(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// A collection of elements addressable by id.
pub trait Page {
    /// Look up an element by id.
    fn element_by_id(&mut self, id: &str) -> Option<&mut dyn TextElement>;
}

/// Write the status line into the element `element_id` (default
/// [`DEFAULT_ELEMENT_ID`]).
///
/// Returns `false` without touching the page when no such element exists.
pub fn render_xp<S, P>(
    tracker: &XpTracker<S>,
    page: &mut P,
    element_id: Option<&str>,
) -> XpResult<bool>
where
    S: KeyValueStore,
    P: Page + ?Sized,
{
    let id = element_id.unwrap_or(DEFAULT_ELEMENT_ID);
    let Some(element) = page.element_by_id(id) else {
        tracing::debug!(id, "render target not found");
        return Ok(false);
    };
    let status = tracker.status()?;
    element.set_text_content(&status.to_string());
    Ok(true)
}

/// A page of text elements keyed by id. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementMap {
    elements: BTreeMap<String, String>,
}

impl ElementMap {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with initial text, replacing any with the same id.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.elements.insert(id.into(), text.into());
    }

    /// Text of the element `id`, if it exists.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }
}

impl Page for ElementMap {
    fn element_by_id(&mut self, id: &str) -> Option<&mut dyn TextElement> {
        self.elements
            .get_mut(id)
            .map(|text| text as &mut dyn TextElement)
    }
}
