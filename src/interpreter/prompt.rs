//! Prompt construction for the assistant
//!
//! Two prompts: a strict parser prompt that maps free text (Arabic or
//! English) onto a JSON command, and an advisor prompt fed with the current
//! month's aggregates. Existing categories and goals are inlined so the
//! model resolves references against real data instead of inventing ids.

use crate::models::SavingGoal;
use crate::services::derive::MonthlySummary;

/// Build the command-parsing prompt for one piece of user input
pub fn build_parse_prompt(input: &str, categories: &[String], goals: &[SavingGoal]) -> String {
    let categories_str = categories.join(", ");
    let goals_str = goals
        .iter()
        .map(|g| format!("ID \"{}\": \"{}\"", g.id.as_uuid(), g.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a strict financial parser for the app "My Pocket".
Map user input (Arabic/English) to a JSON object.

**Context:**
- Existing Categories: [{categories_str}]
- Existing Saving Goals: [{goals_str}]
- Default Category: "General" (عام) if not specified.

**Recognition Rules (Prioritize strictly):**
1. **TRANSACTION**: If input has a number and implies spending, income, debt, or saving.
   - Keywords (Expense): "صرفت", "جبت", "اشتريت", "دفع", "spent", "paid", "bought".
   - Keywords (Income): "قبضت", "خدت", "جالي", "income", "received", "salary".
   - Keywords (Saving): "حوشت", "شلت", "saved", "piggy bank".
   - Keywords (Debt): "استلفت", "سلف", "borrowed", "lent".
   - **IMPORTANT**: If the user says "saved for X" and X matches an Existing Goal Name, set type to 'SAVING' AND put the goal's ID in 'data.goalId'.
2. **BUDGET**: If input mentions "budget", "limit", "ميزانية", "حد".
3. **GOAL**: If input mentions "goal", "target", "save for", "عايز اجيب", "هدف" (Creating a NEW goal).

**Examples (Few-Shot):**
- Input: "صرفت 50 مواصلات" -> Action: TRANSACTION, Type: EXPENSE, Amount: 50, Category: "مواصلات"
- Input: "جبت اكل ب 100" -> Action: TRANSACTION, Type: EXPENSE, Amount: 100, Category: "اكل"
- Input: "قبضت 5000" -> Action: TRANSACTION, Type: INCOME, Amount: 5000, Category: "راتب"
- Input: "ميزانية اكل 3000" -> Action: BUDGET, Category: "اكل", Amount: 3000
- Input: "حوشت 1000 للايفون" (Assuming 'iPhone' exists with ID '123') -> Action: TRANSACTION, Type: SAVING, Amount: 1000, Category: "تحويش", GoalId: "123"

Respond with JSON only: {{"action": "...", "data": {{...}}, "message": "..."}}

**Input to Parse:** "{input}""#
    )
}

/// Build the financial-advice prompt from the month's aggregates
pub fn build_advice_prompt(summary: &MonthlySummary) -> String {
    let top_categories = if summary.top_categories.is_empty() {
        "No significant spending yet".to_string()
    } else {
        summary
            .top_categories
            .iter()
            .map(|(cat, amount)| format!("{}: {}", cat, amount))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        r#"Act as a funny, street-smart Egyptian financial advisor ("أخوك الناصح").
Analyze the user's financial data for this month:
- Total Income: {income} EGP
- Total Expenses: {expense} EGP
- Remaining Balance: {net} EGP
- Top Spending Categories: {top_categories}
- Active Saving Goals: {goal_count}

**Instructions:**
1. Speak in Egyptian Slang (عامية مصرية).
2. If expenses > income, be dramatic and warn them (e.g., "يانهار ابيض!").
3. If they are saving well, praise them (e.g., "يا ولا يا حريف").
4. Give 3 specific, actionable tips based on their TOP CATEGORIES.
5. Keep it short (max 100 words) and use emojis."#,
        income = summary.total_income,
        expense = summary.total_expense,
        net = summary.net(),
        goal_count = summary.goal_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_parse_prompt_inlines_context() {
        let goals = vec![SavingGoal::new("iPhone", Money::from_units(2000), "#fff")];
        let categories = vec!["Food".to_string(), "Transport".to_string()];

        let prompt = build_parse_prompt("spent 50 on food", &categories, &goals);
        assert!(prompt.contains("Food, Transport"));
        assert!(prompt.contains("\"iPhone\""));
        assert!(prompt.contains(&goals[0].id.as_uuid().to_string()));
        assert!(prompt.contains("spent 50 on food"));
    }

    #[test]
    fn test_advice_prompt_includes_aggregates() {
        let summary = MonthlySummary {
            total_income: Money::from_units(5000),
            total_expense: Money::from_units(1900),
            top_categories: vec![("Food".to_string(), Money::from_units(1600))],
            goal_count: 2,
        };

        let prompt = build_advice_prompt(&summary);
        assert!(prompt.contains("5000.00"));
        assert!(prompt.contains("3100.00"));
        assert!(prompt.contains("Food: 1600.00"));
    }

    #[test]
    fn test_advice_prompt_empty_spending() {
        let summary = MonthlySummary {
            total_income: Money::zero(),
            total_expense: Money::zero(),
            top_categories: vec![],
            goal_count: 0,
        };
        let prompt = build_advice_prompt(&summary);
        assert!(prompt.contains("No significant spending yet"));
    }
}
