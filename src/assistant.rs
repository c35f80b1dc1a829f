//! Local keyword-matching assistant.
//!
//! There is no model behind this: the input is lower-cased and checked
//! against a fixed response table in order.

/// Reply when nothing in the table matches.
pub const FALLBACK_REPLY: &str = "I'm not sure about that one. Try asking about skills, \
     projects, education, experience or how to get in touch.";

/// Reply for an empty question.
pub const PROMPT_REPLY: &str =
    "Hi! Ask me anything about this portfolio, for example \"What projects used Kafka?\"";

/// One row of the response table.
#[derive(Debug, Clone, Copy)]
pub struct Response {
    /// Any of these, found in the input, selects the row
    pub keywords: &'static [&'static str],
    /// Reply text
    pub reply: &'static str,
}

/// Default response table. Earlier rows win.
pub const RESPONSES: &[Response] = &[
    Response {
        keywords: &["hello", "hi ", "hey"],
        reply: "Hello! I can tell you about skills, projects, education or how to get in touch.",
    },
    Response {
        keywords: &["contact", "email", "reach", "hire"],
        reply: "The quickest way to get in touch is the contact form, or by email at hello@folio.dev.",
    },
    Response {
        keywords: &["skill", "stack", "technolog", "language"],
        reply: "Core skills: Rust, Java, TypeScript, Kafka, PostgreSQL, Docker, Kubernetes and AWS.",
    },
    Response {
        keywords: &["project", "case stud", "client", "portfolio"],
        reply: "Case studies include a secure analytics pipeline, realtime inventory sync, \
                a monolith migration and a mobile checkout redesign.",
    },
    Response {
        keywords: &["education", "degree", "university", "certif"],
        reply: "B.Sc. Computer Science from the University of Washington, plus AWS Solutions \
                Architect and Google UX Design certificates.",
    },
    Response {
        keywords: &["experience", "years", "background", "career"],
        reply: "About ten years building web platforms and the infrastructure underneath them.",
    },
    Response {
        keywords: &["hobb", "interest", "free time", "photo", "running"],
        reply: "Away from work: trail running, film photography and pour-over coffee.",
    },
    Response {
        keywords: &["dark", "theme", "color", "colour", "accent"],
        reply: "Press Ctrl+D for dark mode or Ctrl+K to pick an accent color, font and animations.",
    },
];

/// Answers questions from a response table.
#[derive(Debug, Clone, Copy)]
pub struct Assistant {
    responses: &'static [Response],
}

impl Assistant {
    /// Assistant over the default table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            responses: RESPONSES,
        }
    }

    /// Assistant over a custom table.
    #[must_use]
    pub const fn with_responses(responses: &'static [Response]) -> Self {
        Self { responses }
    }

    /// Reply for `input`.
    #[must_use]
    pub fn respond(&self, input: &str) -> &'static str {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return PROMPT_REPLY;
        }

        // pad so word-ish keywords like "hi " match at the end of input
        let haystack = format!("{} ", trimmed.to_lowercase());
        self.responses
            .iter()
            .find(|row| row.keywords.iter().any(|k| haystack.contains(k)))
            .map_or(FALLBACK_REPLY, |row| row.reply)
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}
