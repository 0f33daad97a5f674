//! Background Q&A worker.
//!
//! Runs [`QaSession::ask`] on a tokio task and reports the outcome over a
//! channel, so an interactive front end never blocks on the network. The
//! remote APIs have no cancellation, so abandoning a request only marks its
//! ticket stale; the late response is dropped by [`AskWorker::accept`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use tutorforge_core::{QaRecord, TeacherChoice, TutorError};

use crate::session::QaSession;

/// Identifies one submitted question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AskTicket(u64);

/// Result of a background ask, tagged with its ticket.
#[derive(Debug)]
pub struct AskOutcome {
    pub ticket: AskTicket,
    pub result: Result<QaRecord, TutorError>,
}

pub struct AskWorker {
    session: Arc<QaSession>,
    outcome_tx: mpsc::Sender<AskOutcome>,
    next_ticket: AtomicU64,
    /// Tickets below this value are stale.
    valid_from: Arc<AtomicU64>,
}

impl AskWorker {
    /// Create a worker and the receiver its outcomes arrive on.
    pub fn new(session: Arc<QaSession>) -> (Self, mpsc::Receiver<AskOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::channel(8);
        let worker = Self {
            session,
            outcome_tx,
            next_ticket: AtomicU64::new(1),
            valid_from: Arc::new(AtomicU64::new(0)),
        };
        (worker, outcome_rx)
    }

    /// Start asking in the background. Returns immediately.
    pub fn submit(&self, question: impl Into<String>, choice: TeacherChoice) -> AskTicket {
        let ticket = AskTicket(self.next_ticket.fetch_add(1, Ordering::SeqCst));
        let question = question.into();
        let session = Arc::clone(&self.session);
        let tx = self.outcome_tx.clone();

        debug!(ticket = ticket.0, "Submitting question to worker");
        tokio::spawn(async move {
            let result = session.ask(&question, choice).await;
            if let Err(e) = tx.send(AskOutcome { ticket, result }).await {
                error!(ticket = ticket.0, error = %e, "Outcome receiver dropped");
            }
        });
        ticket
    }

    /// Invalidate every ticket issued so far.
    pub fn abandon(&self) {
        let next = self.next_ticket.load(Ordering::SeqCst);
        self.valid_from.store(next, Ordering::SeqCst);
        debug!(valid_from = next, "Abandoned outstanding questions");
    }

    pub fn is_current(&self, ticket: AskTicket) -> bool {
        ticket.0 >= self.valid_from.load(Ordering::SeqCst)
    }

    /// Unwrap an outcome, or `None` if its ticket was abandoned.
    pub fn accept(&self, outcome: AskOutcome) -> Option<Result<QaRecord, TutorError>> {
        if self.is_current(outcome.ticket) {
            Some(outcome.result)
        } else {
            debug!(ticket = outcome.ticket.0, "Ignoring late response");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;
    use crate::session::ChatSettings;

    fn worker(provider: MockProvider) -> (AskWorker, mpsc::Receiver<AskOutcome>) {
        let session = QaSession::new(Arc::new(provider), ChatSettings::default());
        AskWorker::new(Arc::new(session))
    }

    #[tokio::test]
    async fn delivers_outcome_for_ticket() {
        let (worker, mut rx) = worker(MockProvider::new("mock").with_response("答案"));
        let ticket = worker.submit("什么是分数？", TeacherChoice::Auto);

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.ticket, ticket);
        let record = worker.accept(outcome).unwrap().unwrap();
        assert_eq!(record.answer, "答案");
        assert_eq!(record.teacher_role, "数学老师");
    }

    #[tokio::test]
    async fn abandoned_ticket_is_ignored() {
        let (worker, mut rx) = worker(MockProvider::new("mock"));
        let stale = worker.submit("什么是分数？", TeacherChoice::Auto);
        worker.abandon();
        assert!(!worker.is_current(stale));

        let fresh = worker.submit("什么是小数？", TeacherChoice::Auto);
        assert!(worker.is_current(fresh));

        let mut accepted = Vec::new();
        for _ in 0..2 {
            let outcome = rx.recv().await.unwrap();
            let ticket = outcome.ticket;
            if worker.accept(outcome).is_some() {
                accepted.push(ticket);
            }
        }
        assert_eq!(accepted, vec![fresh]);
    }

    #[tokio::test]
    async fn errors_are_delivered_not_swallowed() {
        let (worker, mut rx) = worker(MockProvider::new("mock").failing(503, "busy"));
        worker.submit("什么是分数？", TeacherChoice::Auto);
        let outcome = rx.recv().await.unwrap();
        let err = worker.accept(outcome).unwrap().unwrap_err();
        assert_eq!(err.status(), Some(503));
    }
}
