//! Chain of responsibility: a ticket travels down a line of handlers until
//! one of them takes it, or the chain runs out.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no handler could resolve ticket {0:?}")]
pub struct Unhandled(pub String);

/// A support request with a rough severity.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub subject: String,
    pub severity: u8,
}

impl Ticket {
    pub fn new(subject: impl Into<String>, severity: u8) -> Self {
        Self {
            subject: subject.into(),
            severity,
        }
    }
}

/// Each handler either resolves the ticket or passes it along. The link to
/// the successor lives in the handler itself.
pub trait Handler {
    fn name(&self) -> &'static str;

    /// `Some(resolution)` claims the ticket; `None` passes it on.
    fn try_resolve(&self, ticket: &Ticket) -> Option<String>;

    fn next(&self) -> Option<&dyn Handler>;

    fn handle(&self, ticket: &Ticket) -> Result<String, Unhandled> {
        if let Some(resolution) = self.try_resolve(ticket) {
            return Ok(format!("{}: {}", self.name(), resolution));
        }
        match self.next() {
            Some(next) => next.handle(ticket),
            None => Err(Unhandled(ticket.subject.clone())),
        }
    }
}

/// Answers anything mild with a canned reply.
pub struct Chatbot {
    next: Option<Box<dyn Handler>>,
}

/// Takes everything up to its severity ceiling.
pub struct SupportAgent {
    max_severity: u8,
    next: Option<Box<dyn Handler>>,
}

/// Last line of defense; takes severe tickets only.
pub struct OnCallEngineer {
    next: Option<Box<dyn Handler>>,
}

impl Handler for Chatbot {
    fn name(&self) -> &'static str {
        "chatbot"
    }

    fn try_resolve(&self, ticket: &Ticket) -> Option<String> {
        (ticket.severity <= 1).then(|| "answered from the FAQ".to_string())
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }
}

impl Handler for SupportAgent {
    fn name(&self) -> &'static str {
        "support-agent"
    }

    fn try_resolve(&self, ticket: &Ticket) -> Option<String> {
        (ticket.severity <= self.max_severity).then(|| "resolved over chat".to_string())
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }
}

impl Handler for OnCallEngineer {
    fn name(&self) -> &'static str {
        "on-call"
    }

    fn try_resolve(&self, ticket: &Ticket) -> Option<String> {
        (ticket.severity <= 8).then(|| "paged and mitigated".to_string())
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }
}

/// The escalation path used by the demo: chatbot → agent → on-call.
pub fn escalation_chain() -> impl Handler {
    Chatbot {
        next: Some(Box::new(SupportAgent {
            max_severity: 4,
            next: Some(Box::new(OnCallEngineer { next: None })),
        })),
    }
}

pub fn demo() {
    let chain = escalation_chain();
    let tickets = [
        Ticket::new("how do I reset my password", 1),
        Ticket::new("export is stuck", 4),
        Ticket::new("database is on fire", 8),
        Ticket::new("datacenter is underwater", 10),
    ];

    for ticket in &tickets {
        match chain.handle(ticket) {
            Ok(outcome) => println!("{:?} (sev {}) -> {}", ticket.subject, ticket.severity, outcome),
            Err(err) => println!("{:?} (sev {}) -> {}", ticket.subject, ticket.severity, err),
        }
    }
}
