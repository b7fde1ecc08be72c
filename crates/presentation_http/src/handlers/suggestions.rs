//! Context-aware quick-reply suggestions
//!
//! The portal's chat panel shows suggestion pills that depend on the page the
//! user is looking at; clicking one submits its `say` text as an utterance.

use axum::{Json, extract::Query};
use serde::{Deserialize, Serialize};

/// Query parameters for the suggestions endpoint
#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    /// Page context, e.g. "timeoff" or "benefits"
    #[serde(default)]
    pub page: Option<String>,
}

/// One quick-reply pill
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Suggestion {
    /// Pill label
    pub label: &'static str,
    /// Utterance submitted when the pill is clicked
    pub say: &'static str,
}

const TIMEOFF_SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        label: "Book time off",
        say: "book Dec 15 through Dec 17",
    },
    Suggestion {
        label: "PTO balance",
        say: "What's my PTO balance?",
    },
    Suggestion {
        label: "PTO used",
        say: "How much PTO have I used this year?",
    },
];

const BENEFITS_SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        label: "My benefits",
        say: "What benefits do I have?",
    },
    Suggestion {
        label: "What have I paid",
        say: "What have I paid for benefits this year?",
    },
    Suggestion {
        label: "Medical details",
        say: "Tell me about my medical coverage",
    },
];

const DEFAULT_SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        label: "Pending approvals",
        say: "Show my pending approvals",
    },
    Suggestion {
        label: "Book time off",
        say: "Request time off",
    },
    Suggestion {
        label: "PTO balance",
        say: "What's my PTO balance?",
    },
];

/// Suggestions for a page context
fn suggestions_for(page: Option<&str>) -> [Suggestion; 3] {
    match page {
        Some(p) if p.contains("timeoff") || p.contains("time-off") => TIMEOFF_SUGGESTIONS,
        Some(p) if p.contains("benefit") => BENEFITS_SUGGESTIONS,
        _ => DEFAULT_SUGGESTIONS,
    }
}

/// Handle a suggestions request
pub async fn suggestions(Query(query): Query<SuggestionsQuery>) -> Json<Vec<Suggestion>> {
    Json(suggestions_for(query.page.as_deref()).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeoff_page_gets_booking_pills() {
        let pills = suggestions_for(Some("/employee/timeoff"));
        assert_eq!(pills[0].label, "Book time off");
        assert_eq!(pills[0].say, "book Dec 15 through Dec 17");
    }

    #[test]
    fn benefits_page_gets_benefits_pills() {
        let pills = suggestions_for(Some("benefits"));
        assert_eq!(pills[0].label, "My benefits");
    }

    #[test]
    fn unknown_page_gets_default_pills() {
        assert_eq!(suggestions_for(Some("/dashboard"))[0].label, "Pending approvals");
        assert_eq!(suggestions_for(None)[0].label, "Pending approvals");
    }
}
