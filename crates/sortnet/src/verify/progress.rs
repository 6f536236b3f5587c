//! Progress reporting for long verifications.

/// Receives verification progress.
///
/// `completed` is the fraction of the binary input space proven so far, in
/// `[0.0, 1.0]`. It never decreases within one run. Observers are called at
/// most once per whole percent plus once when the search finishes.
pub trait ProgressObserver {
    fn on_progress(&mut self, completed: f64);
}

impl<F: FnMut(f64)> ProgressObserver for F {
    fn on_progress(&mut self, completed: f64) {
        self(completed)
    }
}

/// Tracks completed weight and throttles observer calls to whole percents.
pub(super) struct ProgressTracker<'a> {
    observer: Option<&'a mut dyn ProgressObserver>,
    completed: f64,
    last_percent: u32,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(observer: Option<&'a mut dyn ProgressObserver>) -> Self {
        Self {
            observer,
            completed: 0.0,
            last_percent: 0,
        }
    }

    /// Record a finished branch covering `weight` of the input space.
    pub fn complete(&mut self, weight: f64) {
        self.completed = (self.completed + weight).min(1.0);
        let Some(observer) = self.observer.as_deref_mut() else {
            return;
        };

        let percent = (self.completed * 100.0).floor() as u32;
        if percent > self.last_percent {
            self.last_percent = percent;
            observer.on_progress(self.completed);
        }
    }

    /// Report the final state once the search stops.
    pub fn finish(&mut self) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_progress(self.completed);
        }
    }

    pub fn completed(&self) -> f64 {
        self.completed
    }
}
