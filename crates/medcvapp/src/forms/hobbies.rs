/// Local copy of the hobbies list. Edits compute the next full list; the panel only takes it
/// once the store has accepted it, through [`load`](Self::load).
#[derive(Debug, Clone, Default)]
pub struct HobbiesPanel {
    items: Vec<String>,
}

impl HobbiesPanel {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replaces the local list with what the store holds.
    pub fn load(&mut self, hobbies: &[String]) {
        self.items = hobbies.to_vec();
    }

    /// The list with `text` appended, trimmed. `None` for blank input.
    /// Duplicates are allowed.
    pub fn with_added(&self, text: &str) -> Option<Vec<String>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let mut next = self.items.clone();
        next.push(text.to_string());
        Some(next)
    }

    /// The list without any hobby equal to `text`.
    pub fn without(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        self.items.iter().filter(|h| *h != text).cloned().collect()
    }
}
