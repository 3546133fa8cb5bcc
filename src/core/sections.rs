// Page-section lifecycle: which top-level view is showing and the cross-fade
// between two of them.
//
// The coordinator only tracks state. The web side applies the resulting
// class changes, waits out the fade delay and then calls
// [`SectionCoordinator::complete`].

/// How a section should currently be marked in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionMark {
    Hidden,
    Active,
    /// Still shown, fading out ahead of the next section.
    Fading,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionState {
    Idle(String),
    Transitioning { from: String, to: String },
}

/// Outcome of a navigation intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionRequest {
    /// Target is already showing.
    NoOp,
    /// No section with that id exists.
    Unknown,
    /// Another transition has not settled yet; the intent is dropped.
    Busy,
    Started { from: String, to: String },
}

/// Result of finishing a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub from: String,
    pub to: String,
}

pub struct SectionCoordinator {
    sections: Vec<String>,
    state: SectionState,
}

impl SectionCoordinator {
    /// `initial` is added to the known sections if missing.
    pub fn new<I, S>(sections: I, initial: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        if !sections.iter().any(|s| s == initial) {
            sections.push(initial.to_string());
        }
        Self {
            sections,
            state: SectionState::Idle(initial.to_string()),
        }
    }

    #[inline]
    pub fn state(&self) -> &SectionState {
        &self.state
    }

    /// The settled section; during a fade this is still the outgoing one.
    pub fn current_section(&self) -> &str {
        match &self.state {
            SectionState::Idle(id) => id,
            SectionState::Transitioning { from, .. } => from,
        }
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, SectionState::Transitioning { .. })
    }

    #[inline]
    pub fn knows(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(String::as_str)
    }

    pub fn request_transition(&mut self, target: &str) -> TransitionRequest {
        let current = match &self.state {
            SectionState::Idle(id) => id.clone(),
            SectionState::Transitioning { .. } => return TransitionRequest::Busy,
        };
        if current == target {
            return TransitionRequest::NoOp;
        }
        if !self.knows(target) {
            return TransitionRequest::Unknown;
        }
        self.state = SectionState::Transitioning {
            from: current.clone(),
            to: target.to_string(),
        };
        TransitionRequest::Started {
            from: current,
            to: target.to_string(),
        }
    }

    /// Settle the in-flight transition, if any.
    pub fn complete(&mut self) -> Option<Settled> {
        match std::mem::replace(&mut self.state, SectionState::Idle(String::new())) {
            SectionState::Transitioning { from, to } => {
                self.state = SectionState::Idle(to.clone());
                Some(Settled { from, to })
            }
            idle => {
                self.state = idle;
                None
            }
        }
    }

    pub fn mark(&self, id: &str) -> SectionMark {
        match &self.state {
            SectionState::Idle(cur) if cur == id => SectionMark::Active,
            SectionState::Transitioning { from, .. } if from == id => SectionMark::Fading,
            _ => SectionMark::Hidden,
        }
    }

    /// Whether the nav link pointing at `id` should be highlighted.
    #[inline]
    pub fn is_nav_active(&self, id: &str) -> bool {
        self.current_section() == id
    }
}

/// `page-projects` with prefix `page-` gives `projects`.
#[inline]
pub fn section_from_dom_id<'a>(dom_id: &'a str, prefix: &str) -> Option<&'a str> {
    dom_id.strip_prefix(prefix).filter(|s| !s.is_empty())
}
