//! Fixed-shape demo tree assembled through a [`UiFactory`].

use super::factory::UiFactory;
use super::widget::{Container, Widget};

/// Build the main window:
///
/// ```text
/// Main window
/// ├─ Menu button
/// └─ Settings panel
///    ├─ Dark theme (checkbox)
///    └─ Save
/// ```
pub fn create_ui(factory: &dyn UiFactory) -> Widget {
    tracing::debug!(platform = %factory.platform(), "assembling ui tree");

    let mut root = Container::new("Main window");
    root.add(factory.create_button("Menu button"));

    let mut settings_panel = Container::new("Settings panel");
    settings_panel.add(factory.create_checkbox("Dark theme"));
    settings_panel.add(factory.create_button("Save"));
    root.add(settings_panel);

    root.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::factory::{MacFactory, WindowsFactory};

    #[test]
    fn tree_has_fixed_shape() {
        let ui = create_ui(&WindowsFactory);
        assert_eq!(ui.name(), "Main window");
        assert_eq!(ui.count(), 5);

        let top = ui.children();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].label(), "WindowsButton");
        assert_eq!(top[0].name(), "Menu button");
        assert_eq!(top[1].name(), "Settings panel");

        let panel = top[1].children();
        assert_eq!(panel[0].label(), "WindowsCheckbox");
        assert_eq!(panel[0].name(), "Dark theme");
        assert_eq!(panel[1].label(), "WindowsButton");
        assert_eq!(panel[1].name(), "Save");
    }

    #[test]
    fn each_call_builds_a_fresh_tree() {
        let mut first = create_ui(&MacFactory);
        let second = create_ui(&MacFactory);
        assert_ne!(first.id(), second.id());
        assert_ne!(first.children()[0].id(), second.children()[0].id());

        first.add(MacFactory.create_button("extra")).expect("add");
        assert_eq!(first.count(), 6);
        assert_eq!(second.count(), 5);
    }
}
