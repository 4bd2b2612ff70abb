//! Abstract factory for platform-consistent leaf widgets.
//!
//! Callers ask a [`UiFactory`] for a button or a checkbox by meaning and get
//! back the right platform variant without naming it.

use std::fmt;

use super::widget::{Leaf, Widget, WidgetKind};

/// Widget family a factory produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Mac,
}

impl Platform {
    /// Display order used by the entry point.
    pub const ALL: &'static [Platform] = &[Platform::Windows, Platform::Mac];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Windows => "Windows",
            Platform::Mac => "Mac",
        })
    }
}

/// Produces a fresh leaf on every call; factories keep no state.
pub trait UiFactory {
    fn platform(&self) -> Platform;

    fn create_button(&self, name: &str) -> Widget {
        self.create(WidgetKind::Button, name)
    }

    fn create_checkbox(&self, name: &str) -> Widget {
        self.create(WidgetKind::Checkbox, name)
    }

    fn create(&self, kind: WidgetKind, name: &str) -> Widget {
        tracing::trace!(platform = %self.platform(), %kind, name, "create widget");
        Leaf::new(self.platform(), kind, name).into()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsFactory;

impl UiFactory for WindowsFactory {
    fn platform(&self) -> Platform {
        Platform::Windows
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MacFactory;

impl UiFactory for MacFactory {
    fn platform(&self) -> Platform {
        Platform::Mac
    }
}

/// Pick the concrete factory for `platform`.
pub fn factory_for(platform: Platform) -> Box<dyn UiFactory> {
    match platform {
        Platform::Windows => Box::new(WindowsFactory),
        Platform::Mac => Box::new(MacFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_widgets_keep_name_and_platform_label() {
        for &platform in Platform::ALL {
            let factory = factory_for(platform);
            for name in ["OK", "", "Тёмная тема"] {
                let button = factory.create_button(name);
                assert_eq!(button.name(), name);
                assert_eq!(button.label(), format!("{platform}Button"));

                let checkbox = factory.create_checkbox(name);
                assert_eq!(checkbox.name(), name);
                assert_eq!(checkbox.label(), format!("{platform}Checkbox"));
            }
        }
    }

    #[test]
    fn concrete_factories_report_their_family() {
        assert_eq!(WindowsFactory.create_button("b").label(), "WindowsButton");
        assert_eq!(WindowsFactory.create_checkbox("c").label(), "WindowsCheckbox");
        assert_eq!(MacFactory.create_button("b").label(), "MacButton");
        assert_eq!(MacFactory.create_checkbox("c").label(), "MacCheckbox");
    }

    #[test]
    fn every_call_yields_a_leaf() {
        let w = MacFactory.create_button("b");
        assert!(w.is_leaf());
        assert_eq!(w.count(), 1);
    }
}
