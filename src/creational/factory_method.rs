//! Factory method: callers ask for a channel, the factory decides the
//! concrete notifier behind it.

/// What the rest of the system programs against.
pub trait Notifier {
    fn channel(&self) -> &'static str;
    fn notify(&self, recipient: &str, message: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
    Push,
}

struct EmailNotifier;
struct SmsNotifier;
struct PushNotifier;

impl Notifier for EmailNotifier {
    fn channel(&self) -> &'static str {
        "email"
    }

    fn notify(&self, recipient: &str, message: &str) -> String {
        format!("To: {recipient}\nSubject: notification\n\n{message}")
    }
}

impl Notifier for SmsNotifier {
    fn channel(&self) -> &'static str {
        "sms"
    }

    fn notify(&self, recipient: &str, message: &str) -> String {
        // Carrier limit; the notifier owns the truncation rule.
        let mut body: String = message.chars().take(160).collect();
        if body.len() < message.len() {
            body.push('…');
        }
        format!("{recipient}: {body}")
    }
}

impl Notifier for PushNotifier {
    fn channel(&self) -> &'static str {
        "push"
    }

    fn notify(&self, recipient: &str, message: &str) -> String {
        format!("[{recipient}] ▲ {message}")
    }
}

/// The factory method: one place that knows the concrete types.
pub fn notifier_for(channel: Channel) -> Box<dyn Notifier> {
    match channel {
        Channel::Email => Box::new(EmailNotifier),
        Channel::Sms => Box::new(SmsNotifier),
        Channel::Push => Box::new(PushNotifier),
    }
}

pub fn demo() {
    for channel in [Channel::Email, Channel::Sms, Channel::Push] {
        let notifier = notifier_for(channel);
        println!(
            "{} -> {:?}",
            notifier.channel(),
            notifier.notify("ada", "build finished")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_selects_concrete_notifier() {
        assert_eq!(notifier_for(Channel::Email).channel(), "email");
        assert_eq!(notifier_for(Channel::Sms).channel(), "sms");
        assert_eq!(notifier_for(Channel::Push).channel(), "push");
    }

    #[test]
    fn test_sms_truncates_long_messages() {
        let long = "x".repeat(200);
        let sent = notifier_for(Channel::Sms).notify("ada", &long);
        assert!(sent.chars().count() < 200);
        assert!(sent.ends_with('…'));
    }
}
