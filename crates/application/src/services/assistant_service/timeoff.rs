//! Time-off intent handlers: booking, PTO usage, leave balances

use chrono::{Datelike, NaiveDate};
use domain::{ChatMessage, LeaveType};
use tracing::{info, warn};

use super::AssistantService;
use crate::{
    date_range_parser::parse_date_range, error::ApplicationError, ports::ConversationSink,
};

impl AssistantService {
    /// Handle a booking request: parse the dates, submit, confirm
    pub(super) async fn handle_book_time_off(
        &self,
        input: &str,
        today: NaiveDate,
        sink: &dyn ConversationSink,
    ) -> bool {
        let Some(range) = parse_date_range(input, today) else {
            sink.append(ChatMessage::assistant(
                "I didn't catch those dates. Try something like: 'book Dec 8 through Dec 11'",
            ))
            .await;
            return false;
        };

        sink.append(ChatMessage::assistant(format!(
            "Got it! Booking time off from {} to {}...",
            range.start_display(),
            range.end_display()
        )))
        .await;

        match self
            .timeoff
            .submit_request(self.employee_id, LeaveType::Pto, range.start, range.end)
            .await
        {
            Ok(confirmation) => {
                info!(
                    request_id = confirmation.request_id,
                    status = %confirmation.status,
                    "Time off request submitted"
                );
                sink.append(ChatMessage::assistant(format!(
                    "✅ Your time off request has been submitted! Request ID: {}. Status: {}.",
                    confirmation.request_id, confirmation.status
                )))
                .await;
                if let Some(notifier) = &self.notifier {
                    notifier.time_off_updated();
                }
                true
            },
            Err(e) => {
                warn!(error = %e, "Time off submission failed");
                let reason = match &e {
                    ApplicationError::ExternalService(msg) => msg.clone(),
                    other => other.to_string(),
                };
                sink.append(ChatMessage::assistant(format!(
                    "❌ Sorry, I couldn't submit your request: {reason}"
                )))
                .await;
                false
            },
        }
    }

    /// Handle "how much PTO have I used" style questions
    pub(super) async fn handle_pto_used(
        &self,
        today: NaiveDate,
        sink: &dyn ConversationSink,
    ) -> bool {
        sink.append(ChatMessage::assistant(
            "Let me check how much PTO you've used this year...",
        ))
        .await;

        let pto_used = match self.balance.fetch_balances(self.employee_id).await {
            Ok(summary) => summary.get(LeaveType::Pto).map(|b| b.total_used),
            Err(e) => {
                warn!(error = %e, "Balance fetch failed");
                None
            },
        };

        match pto_used {
            Some(used) => {
                sink.append(ChatMessage::assistant(format!(
                    "You've used {used} days of PTO in {}.",
                    today.year()
                )))
                .await;
                true
            },
            None => {
                sink.append(ChatMessage::assistant(
                    "Sorry, I couldn't fetch your PTO usage right now.",
                ))
                .await;
                false
            },
        }
    }

    /// Handle balance inquiries: one line per leave type present in the summary
    pub(super) async fn handle_pto_balance(&self, sink: &dyn ConversationSink) -> bool {
        sink.append(ChatMessage::assistant("Let me check your balance...")).await;

        match self.balance.fetch_balances(self.employee_id).await {
            Ok(summary) => {
                let lines: Vec<String> = LeaveType::ALL
                    .into_iter()
                    .filter_map(|leave_type| {
                        summary.get(leave_type).map(|balance| {
                            format!("{}: {} days", leave_type.api_name(), balance.total_remaining)
                        })
                    })
                    .collect();
                sink.append(ChatMessage::assistant(format!(
                    "Your current balances:\n{}",
                    lines.join("\n")
                )))
                .await;
                true
            },
            Err(e) => {
                warn!(error = %e, "Balance fetch failed");
                sink.append(ChatMessage::assistant(
                    "Sorry, I couldn't fetch your balance right now.",
                ))
                .await;
                false
            },
        }
    }
}
