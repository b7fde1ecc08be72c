//! Benefits intent handlers: detail, listing, cost projections

use chrono::NaiveDate;
use domain::{BenefitCategory, ChatMessage, UsdAmount};
use tracing::warn;

use super::AssistantService;
use crate::{
    pay_period::elapsed_pay_periods,
    ports::{BenefitsSummary, ConversationSink},
};

/// Fallback when the benefits gateway is unreachable
const BENEFITS_FALLBACK: &str = "You can view detailed benefits on the Benefits page.";

impl AssistantService {
    /// Handle "tell me about my medical/dental/vision" questions
    pub(super) async fn handle_benefit_detail(
        &self,
        input: &str,
        sink: &dyn ConversationSink,
    ) -> bool {
        // The rule guarantees a category keyword; vision is the residual arm
        let category =
            BenefitCategory::detect(&input.to_lowercase()).unwrap_or(BenefitCategory::Vision);

        sink.append(ChatMessage::assistant("Let me look up your coverage...")).await;

        let Some(summary) = self.fetch_benefits_or_fallback(sink).await else {
            return false;
        };

        let records = summary.records(category);
        if records.is_empty() {
            sink.append(ChatMessage::assistant(format!(
                "You don't have any {} benefits enrolled.",
                category.api_name().to_lowercase()
            )))
            .await;
            return true;
        }

        let details: Vec<String> = records
            .iter()
            .map(|record| {
                format!(
                    "{}: {}\nYou pay: {}/pay period",
                    record.benefit_name,
                    record.description.as_deref().unwrap_or("Coverage available"),
                    record.employee_pays
                )
            })
            .collect();
        sink.append(ChatMessage::assistant(details.join("\n\n"))).await;
        true
    }

    /// Handle "what benefits do I have" - bulleted list by category
    pub(super) async fn handle_benefits_list(&self, sink: &dyn ConversationSink) -> bool {
        sink.append(ChatMessage::assistant("Let me check your benefits...")).await;

        let Some(summary) = self.fetch_benefits_or_fallback(sink).await else {
            return false;
        };

        let categories = summary.enrolled_categories();
        if categories.is_empty() {
            sink.append(ChatMessage::assistant(
                "You don't have any benefits enrolled yet.",
            ))
            .await;
            return true;
        }

        let blocks: Vec<String> = categories
            .iter()
            .map(|category| {
                let names: Vec<String> = summary
                    .records(*category)
                    .iter()
                    .map(|record| format!("• {}", record.benefit_name))
                    .collect();
                format!("{}:\n{}", category.api_name(), names.join("\n"))
            })
            .collect();
        sink.append(ChatMessage::assistant(format!(
            "You're enrolled in:\n\n{}",
            blocks.join("\n\n")
        )))
        .await;
        true
    }

    /// Handle year-to-date cost projections, optionally scoped to a category
    pub(super) async fn handle_benefits_ytd_cost(
        &self,
        input: &str,
        today: NaiveDate,
        sink: &dyn ConversationSink,
    ) -> bool {
        let category = BenefitCategory::detect(&input.to_lowercase());

        let announcement = category.map_or_else(
            || "Let me calculate your year-to-date benefits costs...".to_string(),
            |cat| {
                format!(
                    "Let me calculate your year-to-date {} costs...",
                    cat.api_name().to_lowercase()
                )
            },
        );
        sink.append(ChatMessage::assistant(announcement)).await;

        let Some(summary) = self.fetch_benefits_or_fallback(sink).await else {
            return false;
        };

        let periods = elapsed_pay_periods(today);

        let reply = match category {
            Some(cat) => {
                let records = summary.records(cat);
                if records.is_empty() {
                    sink.append(ChatMessage::assistant(format!(
                        "You don't have any {} benefits enrolled.",
                        cat.api_name().to_lowercase()
                    )))
                    .await;
                    return true;
                }
                let employee: UsdAmount = records.iter().map(|r| r.employee_pays).sum();
                let employer: UsdAmount = records.iter().map(|r| r.employer_pays).sum();
                let total: UsdAmount = records.iter().map(|r| r.total_plan_cost).sum();
                format!(
                    "{} - Year-to-date ({periods} pay periods):\n\n\
                     You've paid: {}\n\nYour employer paid: {}\n\nTotal: {}",
                    cat.api_name(),
                    employee.times(periods),
                    employer.times(periods),
                    total.times(periods)
                )
            },
            None => format!(
                "All Benefits - Year-to-date ({periods} pay periods):\n\n\
                 You've paid: {}\n\nYour employer paid: {}\n\nTotal: {}",
                summary.totals.total_employee_pays.times(periods),
                summary.totals.total_employer_pays.times(periods),
                summary.totals.total_cost.times(periods)
            ),
        };
        sink.append(ChatMessage::assistant(reply)).await;
        true
    }

    /// Handle per-pay-period cost summaries
    pub(super) async fn handle_benefits_cost(&self, sink: &dyn ConversationSink) -> bool {
        sink.append(ChatMessage::assistant("Let me check your benefits...")).await;

        let Some(summary) = self.fetch_benefits_or_fallback(sink).await else {
            return false;
        };

        sink.append(ChatMessage::assistant(format!(
            "Per pay period:\n\nYou pay: {}\n\nYour employer pays: {}\n\nTotal: {}",
            summary.totals.total_employee_pays,
            summary.totals.total_employer_pays,
            summary.totals.total_cost
        )))
        .await;
        true
    }

    /// Handle generic benefit/health/insurance mentions
    pub(super) async fn handle_benefits_generic(&self, sink: &dyn ConversationSink) -> bool {
        sink.append(ChatMessage::assistant("Let me check your benefits...")).await;

        let Some(summary) = self.fetch_benefits_or_fallback(sink).await else {
            return false;
        };

        let categories = summary.enrolled_categories();
        let reply = if categories.is_empty() {
            "You don't have any benefits enrolled yet.".to_string()
        } else {
            let names: Vec<&str> = categories.iter().map(BenefitCategory::api_name).collect();
            format!(
                "You're enrolled in {} benefits.\n\nYour total cost: {} per pay period.",
                names.join(", "),
                summary.totals.total_employee_pays
            )
        };
        sink.append(ChatMessage::assistant(reply)).await;
        true
    }

    /// Fetch benefits, emitting the shared fallback reply on failure
    async fn fetch_benefits_or_fallback(
        &self,
        sink: &dyn ConversationSink,
    ) -> Option<BenefitsSummary> {
        match self.benefits.fetch_benefits(self.employee_id).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!(error = %e, "Benefits fetch failed");
                sink.append(ChatMessage::assistant(BENEFITS_FALLBACK)).await;
                None
            },
        }
    }
}
