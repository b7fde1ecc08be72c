//! Assistant service - Utterance dispatch and reply formatting
//!
//! This module is split into focused sub-modules:
//! - [`timeoff`]: Booking, PTO usage, and balance intents
//! - [`benefits`]: Benefit detail, listing, and cost intents
//!
//! Each dispatch is independent: a short synchronous classification step
//! followed by at most one gateway round-trip. The dispatcher holds no
//! mutable state; concurrent dispatches may interleave their replies in
//! completion order when the host shares a sink between them.

mod benefits;
mod timeoff;

use std::{fmt, sync::Arc, time::Instant};

use chrono::NaiveDate;
use domain::{ChatMessage, EmployeeId, Intent};
use tracing::{debug, instrument};

use crate::{
    intent_rules,
    ports::{BalancePort, BenefitsPort, ConversationSink, TimeOffNotifier, TimeOffPort},
};

/// Help message listing the supported intents
const HELP_REPLY: &str = "I can help you:\n\
    • Book time off (try: 'book Dec 8 through Dec 11')\n\
    • Check your PTO balance\n\
    • View your benefits";

/// Static redirect replies
const PENDING_APPROVALS_REPLY: &str = "You can view pending approvals on the Time Off page.";
const GOALS_REPLY: &str = "Goals are tracked on the Goals page.";
const PERSONAL_REPLY: &str = "Update personal info under the Personal section.";

/// Result of dispatching one utterance
#[derive(Debug, Clone)]
pub struct DispatchResult {
    /// The intent the utterance was classified as
    pub intent: Intent,
    /// Whether the intent was carried out (gateway succeeded, dates parsed)
    pub success: bool,
    /// Execution time in milliseconds
    pub execution_time_ms: u64,
}

/// Service for classifying utterances and executing the matching intent
pub struct AssistantService {
    pub(super) timeoff: Arc<dyn TimeOffPort>,
    pub(super) balance: Arc<dyn BalancePort>,
    pub(super) benefits: Arc<dyn BenefitsPort>,
    /// Optional fire-and-forget listener for time-off changes
    pub(super) notifier: Option<Arc<dyn TimeOffNotifier>>,
    /// The employee all gateway calls act on behalf of
    pub(super) employee_id: EmployeeId,
}

impl fmt::Debug for AssistantService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantService")
            .field("employee_id", &self.employee_id)
            .field("has_notifier", &self.notifier.is_some())
            .finish_non_exhaustive()
    }
}

impl AssistantService {
    /// Create a new assistant service over the three gateway ports
    pub fn new(
        timeoff: Arc<dyn TimeOffPort>,
        balance: Arc<dyn BalancePort>,
        benefits: Arc<dyn BenefitsPort>,
        employee_id: EmployeeId,
    ) -> Self {
        Self {
            timeoff,
            balance,
            benefits,
            notifier: None,
            employee_id,
        }
    }

    /// Add a time-off change notifier
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn TimeOffNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Classify an utterance and execute the matching intent
    ///
    /// Replies are appended to `sink` as they are produced. Gateway failures
    /// are converted into fallback replies and reported via `success`, never
    /// as errors. `today` anchors all date logic so dispatch is deterministic.
    #[instrument(skip(self, sink), fields(message_len = input.len()))]
    pub async fn dispatch(
        &self,
        input: &str,
        today: NaiveDate,
        sink: &dyn ConversationSink,
    ) -> DispatchResult {
        let started = Instant::now();
        let intent = intent_rules::classify(input);
        debug!(intent = %intent, gateway = intent.calls_gateway(), "Dispatching utterance");

        let success = match intent {
            Intent::BookTimeOff => self.handle_book_time_off(input, today, sink).await,
            Intent::PtoUsed => self.handle_pto_used(today, sink).await,
            Intent::BenefitDetail => self.handle_benefit_detail(input, sink).await,
            Intent::BenefitsList => self.handle_benefits_list(sink).await,
            Intent::BenefitsYtdCost => self.handle_benefits_ytd_cost(input, today, sink).await,
            Intent::BenefitsCost => self.handle_benefits_cost(sink).await,
            Intent::PtoBalance => self.handle_pto_balance(sink).await,
            Intent::BenefitsGeneric => self.handle_benefits_generic(sink).await,
            Intent::PendingApprovals => {
                sink.append(ChatMessage::assistant(PENDING_APPROVALS_REPLY)).await;
                true
            },
            Intent::Goals => {
                sink.append(ChatMessage::assistant(GOALS_REPLY)).await;
                true
            },
            Intent::Personal => {
                sink.append(ChatMessage::assistant(PERSONAL_REPLY)).await;
                true
            },
            Intent::Unknown => {
                sink.append(ChatMessage::assistant(HELP_REPLY)).await;
                true
            },
        };

        DispatchResult {
            intent,
            success,
            execution_time_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }
}
