//! Prompt for the savings advisor.

use crate::advice_model::SavingsAdviceRequest;

const ADVICE_PROMPT_TEMPLATE: &str = "You are a personal finance advisor. Provide personalized savings recommendations based on the user's income, expenses, and financial goals.

Income: {income}
Expenses: {expenses}
Financial Goals: {financialGoals}

Provide clear and actionable recommendations to help the user manage their finances and achieve their savings targets.";

const OUTPUT_INSTRUCTION: &str = "Respond with only a JSON object of the form {\"recommendations\": \"<your recommendations>\"}. \
Put all of your advice in the recommendations string.";

/// Renders the advisor prompt for a validated request.
///
/// Rendering is deterministic: the same request always yields the same text.
pub fn render_advice_prompt(request: &SavingsAdviceRequest) -> String {
    let body = ADVICE_PROMPT_TEMPLATE
        .replace("{income}", &request.income.normalize().to_string())
        .replace("{expenses}", &request.expenses.normalize().to_string())
        .replace("{financialGoals}", request.financial_goals.trim());
    format!("{}\n\n{}", body, OUTPUT_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_prompt_includes_inputs() {
        let request = SavingsAdviceRequest::new(dec!(5000.00), dec!(3000.50), "  Save for a house down payment ");
        let prompt = render_advice_prompt(&request);

        assert!(prompt.starts_with("You are a personal finance advisor."));
        assert!(prompt.contains("\n\nIncome: 5000\nExpenses: 3000.5\nFinancial Goals: Save for a house down payment\n\n"));
        assert!(prompt.contains("achieve their savings targets."));
        assert!(prompt.ends_with("Put all of your advice in the recommendations string."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = SavingsAdviceRequest::new(dec!(4200), dec!(3900), "Pay off credit card debt");
        assert_eq!(render_advice_prompt(&request), render_advice_prompt(&request));
    }

    #[test]
    fn test_goals_text_is_not_reinterpreted() {
        let request = SavingsAdviceRequest::new(dec!(1), dec!(1), "Save {income} for a rainy day");
        assert!(render_advice_prompt(&request).contains("Financial Goals: Save {income} for a rainy day"));
    }
}
