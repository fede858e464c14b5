//! Navigation seam used after a successful sign-up

use dioxus::prelude::*;
#[cfg(test)]
use std::cell::RefCell;

pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

/// Lets a parent component decide how a path maps onto its router
impl Navigator for EventHandler<String> {
    fn navigate_to(&self, path: &str) {
        self.call(path.to_string());
    }
}

/// Records requested paths instead of navigating
#[cfg(test)]
#[derive(Default, Debug)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}
