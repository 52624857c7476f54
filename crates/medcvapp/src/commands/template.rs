use crate::actions::Action;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Template;
use crate::store::ResumeStore;

pub fn run<S: ResumeStore>(store: &mut S, template: Template) -> Result<CmdResult> {
    store.dispatch(Action::SetTemplate(template))?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Template set to {}", template)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn sets_and_replaces_template() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.resume().unwrap().template, Template::Professional);

        run(&mut store, Template::Executive).unwrap();
        assert_eq!(store.resume().unwrap().template, Template::Executive);

        run(&mut store, "modern".parse().unwrap()).unwrap();
        assert_eq!(store.resume().unwrap().template, Template::Professional);
    }
}
