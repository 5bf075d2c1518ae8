//! Observer: publishers fan events out to subscribers they know nothing
//! about beyond a trait.

/// Something that happened in the build pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    Started { job: String },
    Finished { job: String, success: bool },
}

pub trait Subscriber {
    fn name(&self) -> &str;
    /// Called for every published event, in subscription order.
    fn on_event(&mut self, event: &BuildEvent) -> Option<String>;
}

/// Owns its subscribers; publishing borrows each one in turn.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber>) {
        self.subscribers.push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Delivers `event` to every subscriber, collecting their reactions.
    pub fn publish(&mut self, event: &BuildEvent) -> Vec<String> {
        self.subscribers
            .iter_mut()
            .filter_map(|subscriber| {
                subscriber
                    .on_event(event)
                    .map(|line| format!("{}: {}", subscriber.name(), line))
            })
            .collect()
    }
}

/// Logs everything it sees.
pub struct ConsoleLogger;

impl Subscriber for ConsoleLogger {
    fn name(&self) -> &str {
        "logger"
    }

    fn on_event(&mut self, event: &BuildEvent) -> Option<String> {
        Some(match event {
            BuildEvent::Started { job } => format!("job {job} started"),
            BuildEvent::Finished { job, success } => {
                format!("job {job} finished (success: {success})")
            }
        })
    }
}

/// Only speaks up about failures, and remembers how many it has seen.
#[derive(Default)]
pub struct FailureCounter {
    failures: usize,
}

impl Subscriber for FailureCounter {
    fn name(&self) -> &str {
        "failure-counter"
    }

    fn on_event(&mut self, event: &BuildEvent) -> Option<String> {
        match event {
            BuildEvent::Finished { job, success: false } => {
                self.failures += 1;
                Some(format!("{job} failed ({} total)", self.failures))
            }
            _ => None,
        }
    }
}

pub fn demo() {
    let mut bus = EventBus::new();
    bus.subscribe(Box::new(ConsoleLogger));
    bus.subscribe(Box::new(FailureCounter::default()));
    println!("{} subscribers attached", bus.subscriber_count());

    let events = [
        BuildEvent::Started { job: "ci".into() },
        BuildEvent::Finished {
            job: "ci".into(),
            success: false,
        },
        BuildEvent::Finished {
            job: "docs".into(),
            success: true,
        },
    ];

    for event in &events {
        println!("publish {event:?}");
        for reaction in bus.publish(event) {
            println!("  -> {reaction}");
        }
    }
}
