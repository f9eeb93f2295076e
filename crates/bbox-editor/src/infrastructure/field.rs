//! In-memory form field.
//!
//! Stands in for a host page input in the CLI and in tests.

use std::cell::RefCell;

use crate::application::ports::FormField;

#[derive(Debug, Default)]
pub struct TextField {
    text: RefCell<String>,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: RefCell::new(text.into()) }
    }
}

impl FormField for TextField {
    fn value(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        let mut text = self.text.borrow_mut();
        text.clear();
        text.push_str(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_overwrites_text() {
        let field = TextField::new("old");
        field.set_value("new");
        assert_eq!(field.value(), "new");
    }
}
