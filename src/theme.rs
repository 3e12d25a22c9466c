// Light/dark theme state with explicit observers. Anything that depends on the
// theme (the page class, the particle palette) subscribes here instead of being
// reached through globals.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

pub struct ThemeSwitch {
    theme: Theme,
    observers: Vec<Box<dyn FnMut(Theme)>>,
}

impl ThemeSwitch {
    pub fn new(theme: Theme) -> Self {
        ThemeSwitch {
            theme,
            observers: Vec::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(Theme) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Stores `theme` and notifies every observer in subscription order,
    /// whether or not the theme actually changed.
    pub fn apply(&mut self, theme: Theme) {
        self.theme = theme;
        for observer in &mut self.observers {
            observer(theme);
        }
    }

    pub fn toggle(&mut self) -> Theme {
        self.toggle_from(self.theme)
    }

    /// Applies the opposite of `current`, the theme the page actually shows.
    /// Other scripts may change the page theme behind the switch's back.
    pub fn toggle_from(&mut self, current: Theme) -> Theme {
        let next = current.toggled();
        self.apply(next);
        next
    }
}
