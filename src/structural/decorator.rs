//! Decorator: layer behavior around an object at runtime by wrapping it in
//! same-shaped objects.

/// Anything that can emit one line of log output.
pub trait MessageWriter {
    fn write(&self, message: &str) -> String;
}

/// The undecorated core: emits the message as-is.
pub struct PlainWriter;

impl MessageWriter for PlainWriter {
    fn write(&self, message: &str) -> String {
        message.to_string()
    }
}

/// Prefixes a fixed logical timestamp. A wall clock would make output
/// nondeterministic; the counter is supplied by the caller.
pub struct TimestampWriter {
    inner: Box<dyn MessageWriter>,
    tick: u64,
}

impl TimestampWriter {
    pub fn new(inner: Box<dyn MessageWriter>, tick: u64) -> Self {
        Self { inner, tick }
    }
}

impl MessageWriter for TimestampWriter {
    fn write(&self, message: &str) -> String {
        format!("[t={:04}] {}", self.tick, self.inner.write(message))
    }
}

/// Masks anything that looks like a secret before passing it on.
pub struct RedactingWriter {
    inner: Box<dyn MessageWriter>,
    needles: Vec<String>,
}

impl RedactingWriter {
    pub fn new(inner: Box<dyn MessageWriter>, needles: Vec<String>) -> Self {
        Self { inner, needles }
    }
}

impl MessageWriter for RedactingWriter {
    fn write(&self, message: &str) -> String {
        let mut masked = message.to_string();
        for needle in &self.needles {
            masked = masked.replace(needle, "•••");
        }
        self.inner.write(&masked)
    }
}

pub fn demo() {
    let plain = PlainWriter;
    println!("plain:      {}", plain.write("token hunter2 accepted"));

    let stamped = TimestampWriter::new(Box::new(PlainWriter), 42);
    println!("stamped:    {}", stamped.write("token hunter2 accepted"));

    // Redaction wraps the stamped writer: masking happens first, then the
    // timestamp goes on, and no writer knows how deep the stack is.
    let stacked = RedactingWriter::new(
        Box::new(TimestampWriter::new(Box::new(PlainWriter), 42)),
        vec!["hunter2".into()],
    );
    println!("full stack: {}", stacked.write("token hunter2 accepted"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_wraps_plain() {
        let writer = TimestampWriter::new(Box::new(PlainWriter), 7);
        assert_eq!(writer.write("hi"), "[t=0007] hi");
    }

    #[test]
    fn test_redaction_masks_secrets() {
        let writer = RedactingWriter::new(Box::new(PlainWriter), vec!["s3cret".into()]);
        assert_eq!(writer.write("key=s3cret ok"), "key=••• ok");
    }

    #[test]
    fn test_decorators_stack_in_order() {
        let writer = RedactingWriter::new(
            Box::new(TimestampWriter::new(Box::new(PlainWriter), 1)),
            vec!["pw".into()],
        );
        assert_eq!(writer.write("pw live"), "[t=0001] ••• live");
    }
}
