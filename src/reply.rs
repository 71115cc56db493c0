/// What a handler decided to do.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Page {
        template: &'static str,
        html: String,
    },
    Redirect(&'static str),
}

/// Final response handed back to the hosting runtime.
#[derive(Debug, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub location: Option<String>,
    /// Template that produced the body, if any.
    pub template: Option<&'static str>,
    pub body: String,
}

pub const HTML: &str = "text/html; charset=utf-8";
pub const TEXT: &str = "text/plain; charset=utf-8";

impl Reply {
    pub fn html(status: u16, template: &'static str, body: String) -> Self {
        Self {
            status,
            content_type: HTML,
            location: None,
            template: Some(template),
            body,
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT,
            location: None,
            template: None,
            body: body.into(),
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            content_type: TEXT,
            location: Some(location.to_string()),
            template: None,
            body: String::new(),
        }
    }
}

impl From<Outcome> for Reply {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Page { template, html } => Reply::html(200, template, html),
            Outcome::Redirect(location) => Reply::redirect(location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_reply_points_home() {
        let reply = Reply::from(Outcome::Redirect("/"));
        assert_eq!(reply.status, 302);
        assert_eq!(reply.location.as_deref(), Some("/"));
    }
}
