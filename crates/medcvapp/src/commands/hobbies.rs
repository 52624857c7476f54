use crate::actions::Action;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::forms::HobbiesPanel;
use crate::store::ResumeStore;

/// Replaces the hobbies list wholesale and brings the panel in line with it.
pub fn set<S: ResumeStore>(
    store: &mut S,
    panel: &mut HobbiesPanel,
    hobbies: Vec<String>,
) -> Result<CmdResult> {
    commit(store, panel, hobbies)
}

pub fn add<S: ResumeStore>(store: &mut S, panel: &mut HobbiesPanel, text: &str) -> Result<CmdResult> {
    panel.load(&store.resume()?.hobbies);
    match panel.with_added(text) {
        Some(next) => commit(store, panel, next),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Empty hobby ignored"));
            Ok(result)
        }
    }
}

/// Removes every hobby equal to `text`.
pub fn remove<S: ResumeStore>(
    store: &mut S,
    panel: &mut HobbiesPanel,
    text: &str,
) -> Result<CmdResult> {
    panel.load(&store.resume()?.hobbies);
    let next = panel.without(text);
    commit(store, panel, next)
}

/// Mirrors `hobbies` into the store; the panel follows only if the store took it.
fn commit<S: ResumeStore>(
    store: &mut S,
    panel: &mut HobbiesPanel,
    hobbies: Vec<String>,
) -> Result<CmdResult> {
    store.dispatch(Action::UpdateHobbies(hobbies))?;
    panel.load(&store.resume()?.hobbies);
    Ok(summary(panel))
}

fn summary(panel: &HobbiesPanel) -> CmdResult {
    let mut result = CmdResult::default();
    let items = panel.items();
    result.add_message(if items.is_empty() {
        CmdMessage::success("Hobbies cleared")
    } else {
        CmdMessage::success(format!("Hobbies: {}", items.join(", ")))
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn panel_edits_are_mirrored_into_the_store() {
        let mut store = InMemoryStore::new();
        let mut panel = HobbiesPanel::default();

        add(&mut store, &mut panel, "Chess").unwrap();
        add(&mut store, &mut panel, "Trekking").unwrap();
        add(&mut store, &mut panel, "Chess").unwrap();
        assert_eq!(
            store.resume().unwrap().hobbies,
            vec!["Chess", "Trekking", "Chess"]
        );

        remove(&mut store, &mut panel, "Chess").unwrap();
        assert_eq!(store.resume().unwrap().hobbies, vec!["Trekking"]);
    }

    #[test]
    fn blank_hobby_is_not_stored() {
        let mut store = InMemoryStore::new();
        let mut panel = HobbiesPanel::default();
        let result = add(&mut store, &mut panel, "  ").unwrap();
        assert!(result.messages[0].content.contains("ignored"));
        assert!(store.resume().unwrap().hobbies.is_empty());
    }

    #[test]
    fn wholesale_set_resyncs_the_panel() {
        let mut store = InMemoryStore::new();
        let mut panel = HobbiesPanel::default();
        add(&mut store, &mut panel, "Chess").unwrap();

        set(&mut store, &mut panel, vec!["Reading".into()]).unwrap();
        add(&mut store, &mut panel, "Cycling").unwrap();
        assert_eq!(store.resume().unwrap().hobbies, vec!["Reading", "Cycling"]);
    }

    #[test]
    fn edits_start_from_hobbies_already_stored() {
        let mut store = StoreFixture::new().with_hobbies(&["Chess", "Golf"]).build();
        let mut panel = HobbiesPanel::default();

        add(&mut store, &mut panel, "Running").unwrap();
        assert_eq!(
            store.resume().unwrap().hobbies,
            vec!["Chess", "Golf", "Running"]
        );

        let mut panel = HobbiesPanel::default();
        remove(&mut store, &mut panel, "Golf").unwrap();
        assert_eq!(store.resume().unwrap().hobbies, vec!["Chess", "Running"]);
        assert_eq!(panel.items(), ["Chess", "Running"]);
    }

    #[test]
    fn failed_dispatch_leaves_the_panel_untouched() {
        let mut store = InMemoryStore::pending();
        let mut panel = HobbiesPanel::default();
        panel.load(&["Chess".to_string()]);

        assert!(matches!(
            add(&mut store, &mut panel, "Running"),
            Err(ResumeError::NotInitialized)
        ));
        assert!(matches!(
            set(&mut store, &mut panel, vec!["Golf".into()]),
            Err(ResumeError::NotInitialized)
        ));
        assert_eq!(panel.items(), ["Chess"]);
    }
}
