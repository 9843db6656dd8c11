#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerdictStatus {
    Uncertain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub message: &'static str,
}

const UNCERTAIN_MESSAGE: &str = "We couldn't find definitive information about this claim. \
Please verify from official sources like government websites, school administration, or trusted news outlets.";

/// Claim checker behind the profile view. Every claim gets the same verdict.
#[derive(Clone, Debug, Default)]
pub struct FactCheckSession {
    pub claim: String,
    checking: bool,
    verdict: Option<Verdict>,
}

impl FactCheckSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checking(&self) -> bool {
        self.checking
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        !self.claim.trim().is_empty() && !self.checking
    }

    /// Start checking the current claim. Returns false if nothing was started.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.checking = true;
        true
    }

    pub fn deliver(&mut self) -> bool {
        if !self.checking {
            return false;
        }
        self.checking = false;
        self.verdict = Some(Verdict {
            status: VerdictStatus::Uncertain,
            message: UNCERTAIN_MESSAGE,
        });
        true
    }
}
