use std::collections::HashSet;

/// A named state change of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    SourceTextChanged,
    SourceLanguageChanged,
    TargetLanguageChanged,
    Swapped,
}

/// The set of transitions that enqueue a translation request.
///
/// By default only source-text and target-language changes retranslate.
/// Changing the source language alone does not, and neither does a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triggers {
    subscribed: HashSet<Transition>,
}

impl Triggers {
    /// A set with no subscriptions: nothing retranslates on its own.
    pub fn none() -> Self {
        Self {
            subscribed: HashSet::new(),
        }
    }

    pub fn subscribe(&mut self, transition: Transition) -> &mut Self {
        self.subscribed.insert(transition);
        self
    }

    pub fn unsubscribe(&mut self, transition: Transition) -> &mut Self {
        self.subscribed.remove(&transition);
        self
    }

    pub fn fires_on(&self, transition: Transition) -> bool {
        self.subscribed.contains(&transition)
    }
}

impl Default for Triggers {
    fn default() -> Self {
        let mut triggers = Self::none();
        triggers
            .subscribe(Transition::SourceTextChanged)
            .subscribe(Transition::TargetLanguageChanged);
        triggers
    }
}
