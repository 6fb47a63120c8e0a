/// Append-only step recorder threaded through a generator.
///
/// Generators hand it down their call tree by `&mut` instead of keeping
/// steps in struct fields, so every call starts from an empty trace and
/// nothing leaks between requests. Steps are owned values: callers clone
/// their working state into a step before recording it.
#[derive(Debug, Clone)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Trace<S> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn record(&mut self, step: S) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self::new()
    }
}
