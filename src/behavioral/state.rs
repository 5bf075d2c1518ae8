//! State: an article moves through a fixed workflow, and what you can do
//! to it depends entirely on where it is.
//!
//! Transitions consume the old state and return the new one, so an article
//! can never be in two states at once and invalid moves are typed errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot {action} an article in state {state}")]
pub struct TransitionError {
    pub state: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Article {
    Draft { body: String },
    InReview { body: String, reviewer: String },
    Published { body: String, url: String },
    Rejected { body: String, reason: String },
}

impl Article {
    pub fn new(body: impl Into<String>) -> Self {
        Article::Draft { body: body.into() }
    }

    pub const fn state_name(&self) -> &'static str {
        match self {
            Article::Draft { .. } => "draft",
            Article::InReview { .. } => "in-review",
            Article::Published { .. } => "published",
            Article::Rejected { .. } => "rejected",
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Article::Draft { body }
            | Article::InReview { body, .. }
            | Article::Published { body, .. }
            | Article::Rejected { body, .. } => body,
        }
    }

    fn invalid(&self, action: &'static str) -> TransitionError {
        TransitionError {
            state: self.state_name(),
            action,
        }
    }

    /// Draft → InReview. Rejected drafts can be resubmitted too.
    pub fn submit(self, reviewer: impl Into<String>) -> Result<Self, TransitionError> {
        match self {
            Article::Draft { body } | Article::Rejected { body, .. } => Ok(Article::InReview {
                body,
                reviewer: reviewer.into(),
            }),
            other => Err(other.invalid("submit")),
        }
    }

    /// InReview → Published.
    pub fn approve(self, url: impl Into<String>) -> Result<Self, TransitionError> {
        match self {
            Article::InReview { body, .. } => Ok(Article::Published {
                body,
                url: url.into(),
            }),
            other => Err(other.invalid("approve")),
        }
    }

    /// InReview → Rejected.
    pub fn reject(self, reason: impl Into<String>) -> Result<Self, TransitionError> {
        match self {
            Article::InReview { body, .. } => Ok(Article::Rejected {
                body,
                reason: reason.into(),
            }),
            other => Err(other.invalid("reject")),
        }
    }
}

pub fn demo() {
    let article = Article::new("Undo stacks considered helpful");
    println!("created: {}", article.state_name());

    let article = match article.submit("grace") {
        Ok(article) => {
            println!("submitted for review: {}", article.state_name());
            article
        }
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    // Publishing from review is the happy path; publishing again is not.
    match article.approve("https://blog.example/undo-stacks") {
        Ok(published) => {
            println!("approved: {}", published.state_name());
            if let Err(err) = published.submit("hopper") {
                println!("and then: {err}");
            }
        }
        Err(err) => println!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_to_published() {
        let article = Article::new("body")
            .submit("grace")
            .and_then(|a| a.approve("https://example.com/a"))
            .unwrap();
        assert_eq!(article.state_name(), "published");
        assert_eq!(article.body(), "body");
    }

    #[test]
    fn test_rejected_article_can_be_resubmitted() {
        let article = Article::new("body")
            .submit("grace")
            .and_then(|a| a.reject("too short"))
            .and_then(|a| a.submit("hopper"))
            .unwrap();
        assert_eq!(article.state_name(), "in-review");
    }

    #[test]
    fn test_draft_cannot_be_approved() {
        let err = Article::new("body").approve("url").unwrap_err();
        assert_eq!(
            err,
            TransitionError {
                state: "draft",
                action: "approve"
            }
        );
    }

    #[test]
    fn test_published_is_terminal_for_submit() {
        let err = Article::new("body")
            .submit("grace")
            .and_then(|a| a.approve("url"))
            .and_then(|a| a.submit("again"))
            .unwrap_err();
        assert_eq!(err.state, "published");
    }
}
