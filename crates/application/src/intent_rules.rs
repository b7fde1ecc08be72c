//! Intent rule table - ordered keyword patterns for utterance classification
//!
//! The rules are an explicit array evaluated top to bottom; the first matching
//! predicate wins. Priority therefore lives in the array order, not in nested
//! conditionals, and can be tested in isolation.

use std::sync::LazyLock;

use domain::Intent;
use regex::Regex;
use tracing::debug;

/// A single classification rule
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    /// Intent selected when the predicate matches
    pub intent: Intent,
    /// Predicate over the lower-cased utterance
    matches: fn(&str) -> bool,
}

/// "dec 8", "friday 12" - any word followed by a number
static WORD_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"\w+\s+\d+").expect("Failed to compile word-number pattern")
});

/// The rule table, in priority order
static RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::BookTimeOff,
        matches: is_book_time_off,
    },
    IntentRule {
        intent: Intent::PtoUsed,
        matches: is_pto_used,
    },
    IntentRule {
        intent: Intent::BenefitDetail,
        matches: is_benefit_detail,
    },
    IntentRule {
        intent: Intent::BenefitsList,
        matches: is_benefits_list,
    },
    IntentRule {
        intent: Intent::BenefitsYtdCost,
        matches: is_benefits_ytd_cost,
    },
    IntentRule {
        intent: Intent::BenefitsCost,
        matches: is_benefits_cost,
    },
    IntentRule {
        intent: Intent::PtoBalance,
        matches: is_pto_balance,
    },
    IntentRule {
        intent: Intent::PendingApprovals,
        matches: is_pending_approvals,
    },
    IntentRule {
        intent: Intent::BenefitsGeneric,
        matches: is_benefits_generic,
    },
    IntentRule {
        intent: Intent::Goals,
        matches: is_goals,
    },
    IntentRule {
        intent: Intent::Personal,
        matches: is_personal,
    },
];

fn is_book_time_off(msg: &str) -> bool {
    msg.contains("book")
        && (msg.contains("time off") || msg.contains("pto") || WORD_NUMBER.is_match(msg))
}

fn is_pto_used(msg: &str) -> bool {
    msg.contains("used") && (msg.contains("vacation") || msg.contains("pto"))
}

fn is_benefit_detail(msg: &str) -> bool {
    (msg.contains("tell me about") || msg.contains("what is") || msg.contains("show me"))
        && (msg.contains("medical") || msg.contains("dental") || msg.contains("vision"))
}

fn is_benefits_list(msg: &str) -> bool {
    (msg.contains("what benefit") || msg.contains("my benefit") || msg.contains("which benefit"))
        && !msg.contains("cost")
        && !msg.contains("pay")
        && !msg.contains("how much")
}

fn is_benefits_ytd_cost(msg: &str) -> bool {
    let asks_paid = (msg.contains("what") || msg.contains("how much"))
        && (msg.contains("paid") || msg.contains("spent"));
    let follow_up =
        msg.contains("what about") || msg.contains("how about") || msg.contains("just for");
    (asks_paid || follow_up)
        && (msg.contains("medical")
            || msg.contains("dental")
            || msg.contains("vision")
            || msg.contains("benefit"))
}

fn is_benefits_cost(msg: &str) -> bool {
    (msg.contains("how much") || msg.contains("total"))
        && (msg.contains("benefit") || msg.contains("pay") || msg.contains("cost"))
}

fn is_pto_balance(msg: &str) -> bool {
    msg.contains("balance")
        || ((msg.contains("how much") || msg.contains("how many")) && msg.contains("pto"))
}

fn is_pending_approvals(msg: &str) -> bool {
    msg.contains("pending") || msg.contains("approval")
}

fn is_benefits_generic(msg: &str) -> bool {
    msg.contains("benefit") || msg.contains("health") || msg.contains("insurance")
}

fn is_goals(msg: &str) -> bool {
    msg.contains("goal")
}

fn is_personal(msg: &str) -> bool {
    msg.contains("personal")
}

/// The rule table, for priority tests and diagnostics
pub fn rules() -> &'static [IntentRule] {
    RULES
}

/// Classify an utterance into an intent
///
/// First matching rule wins; anything unmatched is [`Intent::Unknown`].
pub fn classify(input: &str) -> Intent {
    let lower = input.to_lowercase();
    let intent = RULES
        .iter()
        .find(|rule| (rule.matches)(&lower))
        .map_or(Intent::Unknown, |rule| rule.intent);
    debug!(intent = %intent, "Classified utterance");
    intent
}
