use std::time::{Duration, Instant};

use tracing::debug;

/// View that owns a delayed task. Leaving the view cancels its tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    Chat,
    Quiz,
    FactCheck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Job {
    ChatReply,
    QuizAdvance,
    FactCheckVerdict,
}

#[derive(Clone, Debug)]
struct Task {
    /// Scheduling order, used to break ties between equal due times.
    id: u64,
    owner: Owner,
    job: Job,
    due: Instant,
}

/// Delayed jobs driven by the event loop's tick. Time is passed in so callers
/// and tests control the clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, owner: Owner, job: Job, now: Instant, delay: Duration) {
        let id = self.next_id;
        self.next_id += 1;
        debug!(?owner, ?job, delay_ms = delay.as_millis() as u64, "scheduled task");
        self.tasks.push(Task {
            id,
            owner,
            job,
            due: now + delay,
        });
    }

    pub fn cancel_owner(&mut self, owner: Owner) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.owner != owner);
        let cancelled = before - self.tasks.len();
        if cancelled > 0 {
            debug!(?owner, cancelled, "cancelled tasks");
        }
        cancelled
    }

    pub fn cancel_all(&mut self) {
        if !self.tasks.is_empty() {
            debug!(cancelled = self.tasks.len(), "cancelled all tasks");
        }
        self.tasks.clear();
    }

    pub fn has_pending(&self, owner: Owner) -> bool {
        self.tasks.iter().any(|t| t.owner == owner)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove and return the jobs due at `now`, earliest first. Ties keep
    /// scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<(Owner, Job)> {
        let (mut due, pending): (Vec<Task>, Vec<Task>) =
            self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = pending;
        due.sort_by_key(|t| (t.due, t.id));
        due.into_iter().map(|t| (t.owner, t.job)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_nothing_due_before_delay() {
        let mut s = Scheduler::new();
        let t0 = Instant::now();
        s.schedule(Owner::Chat, Job::ChatReply, t0, 1500 * MS);
        assert!(s.take_due(t0 + 1499 * MS).is_empty());
        assert_eq!(s.take_due(t0 + 1500 * MS), vec![(Owner::Chat, Job::ChatReply)]);
        assert!(s.is_empty());
    }

    #[test]
    fn test_due_jobs_in_time_order() {
        let mut s = Scheduler::new();
        let t0 = Instant::now();
        s.schedule(Owner::Chat, Job::ChatReply, t0, 1500 * MS);
        s.schedule(Owner::Quiz, Job::QuizAdvance, t0, 500 * MS);
        s.schedule(Owner::FactCheck, Job::FactCheckVerdict, t0, 1500 * MS);
        assert_eq!(
            s.take_due(t0 + 2000 * MS),
            vec![
                (Owner::Quiz, Job::QuizAdvance),
                (Owner::Chat, Job::ChatReply),
                (Owner::FactCheck, Job::FactCheckVerdict),
            ]
        );
    }

    #[test]
    fn test_cancel_owner_only_hits_that_owner() {
        let mut s = Scheduler::new();
        let t0 = Instant::now();
        s.schedule(Owner::Chat, Job::ChatReply, t0, 10 * MS);
        s.schedule(Owner::Quiz, Job::QuizAdvance, t0, 10 * MS);
        assert_eq!(s.cancel_owner(Owner::Chat), 1);
        assert!(!s.has_pending(Owner::Chat));
        assert!(s.has_pending(Owner::Quiz));
        assert_eq!(s.take_due(t0 + 10 * MS), vec![(Owner::Quiz, Job::QuizAdvance)]);
    }

    #[test]
    fn test_cancel_all_drops_every_owner() {
        let mut s = Scheduler::new();
        let t0 = Instant::now();
        s.schedule(Owner::Chat, Job::ChatReply, t0, MS);
        s.schedule(Owner::FactCheck, Job::FactCheckVerdict, t0, MS);
        s.cancel_all();
        assert!(s.is_empty());
        assert!(s.take_due(t0 + MS).is_empty());
    }
}
