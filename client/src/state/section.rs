//! Wizard sections and the navigator that shows exactly one of them.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// One of the six mutually exclusive views of the ordering wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Select,
    Details,
    Preview,
    Cart,
    Checkout,
    Confirmation,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Select,
        Section::Details,
        Section::Preview,
        Section::Cart,
        Section::Checkout,
        Section::Confirmation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Details => "details",
            Self::Preview => "preview",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Confirmation => "confirmation",
        }
    }

    /// The step a "back" control returns to. `Select` has none; the
    /// confirmation view links home.
    pub fn previous(self) -> Option<Section> {
        match self {
            Self::Select => None,
            Self::Details | Self::Confirmation => Some(Self::Select),
            Self::Preview => Some(Self::Details),
            Self::Cart => Some(Self::Preview),
            Self::Checkout => Some(Self::Cart),
        }
    }
}

/// Named-state router. Starts on `Select`; only explicit calls move it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    active: Section,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Hide every section except `section`.
    pub fn show(&mut self, section: Section) {
        if self.active != section {
            tracing::debug!(from = self.active.as_str(), to = section.as_str(), "show section");
        }
        self.active = section;
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.active == section
    }

    /// Move to the previous step; returns `false` when there is none.
    pub fn back(&mut self) -> bool {
        match self.active.previous() {
            Some(prev) => {
                self.show(prev);
                true
            }
            None => false,
        }
    }

    pub fn home(&mut self) {
        self.show(Section::Select);
    }
}
