//! Derivation engine
//!
//! Pure, side-effect-free functions that fold the flat transaction log into
//! account balances, month views, budget progress, and goal totals. Nothing
//! here mutates or persists anything; every value is recomputed from a
//! snapshot so the log and the derived views cannot drift apart.

use std::collections::HashMap;

use crate::models::{
    AccountId, Budget, BudgetProgress, GoalId, GoalProgress, Money, PaymentAccount, SavingGoal,
    Transaction, TransactionType,
};

/// Categories offered before the user adds any of their own
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "General",
    "Food",
    "Transport",
    "Bills",
    "Shopping",
    "Health",
    "Salary",
];

/// Balance of one account: the sum of signed contributions of every
/// transaction belonging to it. Transactions without an account reference
/// count toward the default account.
pub fn account_balance(
    transactions: &[Transaction],
    account_id: AccountId,
    default_account: AccountId,
) -> Money {
    transactions
        .iter()
        .filter(|t| t.belongs_to(account_id, default_account))
        .map(|t| t.signed_amount())
        .sum()
}

/// Total balance across the ledger: the default account plus every
/// non-default account.
pub fn total_balance(transactions: &[Transaction], accounts: &[PaymentAccount]) -> Money {
    let Some(default) = accounts
        .iter()
        .find(|a| a.is_default)
        .or_else(|| accounts.first())
    else {
        return Money::zero();
    };

    let default_balance = account_balance(transactions, default.id, default.id);
    let others: Money = accounts
        .iter()
        .filter(|a| !a.is_default)
        .map(|a| account_balance(transactions, a.id, default.id))
        .sum();

    default_balance + others
}

/// Transactions falling in the given calendar month, sorted descending by
/// date. This is the basis for every "current view" computation.
pub fn month_filter(transactions: &[Transaction], year: i32, month: u32) -> Vec<Transaction> {
    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.in_month(year, month))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

/// Per-budget spending within the supplied month view.
///
/// Only expense and card spending count. Results are sorted by percentage
/// descending so the most at-risk categories surface first.
pub fn budget_progress(
    budgets: &[Budget],
    month_transactions: &[Transaction],
) -> Vec<BudgetProgress> {
    let mut progress: Vec<BudgetProgress> = budgets
        .iter()
        .map(|b| {
            let spent: Money = month_transactions
                .iter()
                .filter(|t| t.transaction_type.counts_toward_budget() && t.category == b.category)
                .map(|t| t.amount)
                .sum();

            let percentage = if b.limit.cents() <= 0 {
                100.0
            } else {
                ((spent.cents() as f64 / b.limit.cents() as f64) * 100.0).min(100.0)
            };

            BudgetProgress {
                category: b.category.clone(),
                limit: b.limit,
                spent,
                percentage,
            }
        })
        .collect();

    progress.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    progress
}

/// Sum of SAVING transactions referencing the given goal
pub fn goal_saved_total(transactions: &[Transaction], goal_id: GoalId) -> Money {
    transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Saving && t.goal_id == Some(goal_id))
        .map(|t| t.amount)
        .sum()
}

/// Every goal with its derived saved-so-far total
pub fn goal_progress(goals: &[SavingGoal], transactions: &[Transaction]) -> Vec<GoalProgress> {
    goals
        .iter()
        .map(|goal| GoalProgress {
            current_amount: goal_saved_total(transactions, goal.id),
            goal: goal.clone(),
        })
        .collect()
}

/// The completion-transition edge: true only when adding `added` to
/// `current` crosses `target` for the first time. Level-triggered reads
/// (already at or above the target) return false, so the celebration fires
/// exactly once per crossing.
pub fn crosses_target(current: Money, target: Money, added: Money) -> bool {
    current < target && current + added >= target
}

/// Union of categories from transaction history, the default list, and
/// user-added labels, deduplicated preserving first occurrence.
pub fn unique_categories(transactions: &[Transaction], custom: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    let history = transactions.iter().map(|t| t.category.as_str());
    let defaults = DEFAULT_CATEGORIES.iter().copied();
    let user = custom.iter().map(|c| c.as_str());

    for cat in history.chain(defaults).chain(user) {
        if !cat.is_empty() && !seen.iter().any(|s| s == cat) {
            seen.push(cat.to_string());
        }
    }
    seen
}

/// Aggregated view of one month, fed to the financial-advice prompt
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub total_income: Money,
    pub total_expense: Money,
    /// Top spending categories, highest first (at most three)
    pub top_categories: Vec<(String, Money)>,
    pub goal_count: usize,
}

impl MonthlySummary {
    /// Income minus expenses for the month
    pub fn net(&self) -> Money {
        self.total_income - self.total_expense
    }
}

/// Build the monthly summary used by the advisor: income, expenses
/// (expense + card spending), and the three heaviest categories.
pub fn monthly_summary(
    month_transactions: &[Transaction],
    goals: &[SavingGoal],
) -> MonthlySummary {
    let total_income: Money = month_transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Income)
        .map(|t| t.amount)
        .sum();

    let total_expense: Money = month_transactions
        .iter()
        .filter(|t| t.transaction_type.counts_toward_budget())
        .map(|t| t.amount)
        .sum();

    let mut by_category: HashMap<&str, Money> = HashMap::new();
    for t in month_transactions
        .iter()
        .filter(|t| t.transaction_type.counts_toward_budget())
    {
        *by_category.entry(t.category.as_str()).or_default() += t.amount;
    }

    let mut top_categories: Vec<(String, Money)> = by_category
        .into_iter()
        .map(|(cat, amount)| (cat.to_string(), amount))
        .collect();
    top_categories.sort_by(|a, b| b.1.cmp(&a.1));
    top_categories.truncate(3);

    MonthlySummary {
        total_income,
        total_expense,
        top_categories,
        goal_count: goals.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountKind;

    fn tx(amount: i64, tt: TransactionType, category: &str) -> Transaction {
        Transaction::new(Money::from_units(amount), tt, category)
    }

    fn dated(mut t: Transaction, rfc3339: &str) -> Transaction {
        t.date = rfc3339.parse().unwrap();
        t
    }

    #[test]
    fn test_balance_fold_sign_table() {
        // P1: balance equals the sum of signed contributions, order-independent
        let acc = AccountId::new();
        let transactions = vec![
            tx(100, TransactionType::Income, "Salary"),
            tx(30, TransactionType::Expense, "Food"),
            tx(50, TransactionType::DebtOwedByMe, "Loan"),
            tx(20, TransactionType::DebtOwedToMe, "Friend"),
            tx(10, TransactionType::Saving, "Savings"),
            tx(5, TransactionType::CreditSpend, "Shopping"),
        ];

        // +100 -30 +50 -20 -10 -5 = 85
        assert_eq!(
            account_balance(&transactions, acc, acc),
            Money::from_units(85)
        );

        let mut reversed = transactions.clone();
        reversed.reverse();
        assert_eq!(account_balance(&reversed, acc, acc), Money::from_units(85));
    }

    #[test]
    fn test_balance_only_counts_matching_account() {
        let default = AccountId::new();
        let other = AccountId::new();

        let mut a = tx(100, TransactionType::Income, "Salary");
        a.account_id = Some(other);
        let b = tx(40, TransactionType::Expense, "Food"); // no account => default

        let transactions = vec![a, b];
        assert_eq!(
            account_balance(&transactions, default, default),
            Money::from_units(-40)
        );
        assert_eq!(
            account_balance(&transactions, other, default),
            Money::from_units(100)
        );
    }

    #[test]
    fn test_total_balance_scenario_a() {
        // Scenario A: default cash account, income 5000, expense 1200
        let cash = PaymentAccount::seeded_default();
        let transactions = vec![
            tx(5000, TransactionType::Income, "Salary"),
            tx(1200, TransactionType::Expense, "Food"),
        ];

        assert_eq!(
            total_balance(&transactions, &[cash]),
            Money::from_units(3800)
        );
    }

    #[test]
    fn test_total_balance_includes_non_default_accounts() {
        let cash = PaymentAccount::seeded_default();
        let bank = PaymentAccount::new("Bank", AccountKind::Bank);

        let mut deposit = tx(300, TransactionType::Income, "Salary");
        deposit.account_id = Some(bank.id);
        let transactions = vec![tx(100, TransactionType::Income, "Salary"), deposit];

        assert_eq!(
            total_balance(&transactions, &[cash, bank]),
            Money::from_units(400)
        );
    }

    #[test]
    fn test_month_filter_boundary() {
        // P5: last instant of month M and first instant of M+1 split apart
        let end_of_march = dated(
            tx(10, TransactionType::Expense, "Food"),
            "2024-03-31T23:59:59Z",
        );
        let start_of_april = dated(
            tx(20, TransactionType::Expense, "Food"),
            "2024-04-01T00:00:00Z",
        );
        let transactions = vec![end_of_march.clone(), start_of_april.clone()];

        let march = month_filter(&transactions, 2024, 3);
        let april = month_filter(&transactions, 2024, 4);
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].id, end_of_march.id);
        assert_eq!(april.len(), 1);
        assert_eq!(april[0].id, start_of_april.id);
    }

    #[test]
    fn test_month_filter_sorts_descending() {
        let older = dated(
            tx(10, TransactionType::Expense, "Food"),
            "2024-03-05T10:00:00Z",
        );
        let newer = dated(
            tx(20, TransactionType::Expense, "Food"),
            "2024-03-20T10:00:00Z",
        );
        let filtered = month_filter(&[older.clone(), newer.clone()], 2024, 3);
        assert_eq!(filtered[0].id, newer.id);
        assert_eq!(filtered[1].id, older.id);
    }

    #[test]
    fn test_budget_progress_scenario_a() {
        let budgets = vec![Budget::new("Food", Money::from_units(1500))];
        let month = vec![
            tx(1200, TransactionType::Expense, "Food"),
            tx(5000, TransactionType::Income, "Salary"),
        ];

        let progress = budget_progress(&budgets, &month);
        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].spent, Money::from_units(1200));
        assert!((progress[0].percentage - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_budget_progress_caps_at_100_and_sorts() {
        let budgets = vec![
            Budget::new("Food", Money::from_units(100)),
            Budget::new("Transport", Money::from_units(100)),
        ];
        let month = vec![
            tx(250, TransactionType::Expense, "Food"),
            tx(30, TransactionType::CreditSpend, "Transport"),
        ];

        let progress = budget_progress(&budgets, &month);
        // Food is most at risk, capped at 100
        assert_eq!(progress[0].category, "Food");
        assert!((progress[0].percentage - 100.0).abs() < f64::EPSILON);
        assert!(progress[0].is_over());
        assert!((progress[1].percentage - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_budget_counts_credit_spend_but_not_saving() {
        let budgets = vec![Budget::new("Food", Money::from_units(100))];
        let month = vec![
            tx(20, TransactionType::CreditSpend, "Food"),
            tx(50, TransactionType::Saving, "Food"),
        ];
        let progress = budget_progress(&budgets, &month);
        assert_eq!(progress[0].spent, Money::from_units(20));
    }

    #[test]
    fn test_goal_progress_is_pure() {
        // P2: recomputing twice on an unchanged log yields identical totals
        let goal = SavingGoal::new("iPhone", Money::from_units(2000), "#fff");
        let mut saving = tx(500, TransactionType::Saving, "Savings");
        saving.goal_id = Some(goal.id);
        let transactions = vec![saving];
        let goals = vec![goal];

        let first = goal_progress(&goals, &transactions);
        let second = goal_progress(&goals, &transactions);
        assert_eq!(first[0].current_amount, Money::from_units(500));
        assert_eq!(first[0].current_amount, second[0].current_amount);
    }

    #[test]
    fn test_goal_total_ignores_other_goals_and_types() {
        let goal = SavingGoal::new("iPhone", Money::from_units(2000), "#fff");
        let other = SavingGoal::new("Car", Money::from_units(9000), "#000");

        let mut mine = tx(500, TransactionType::Saving, "Savings");
        mine.goal_id = Some(goal.id);
        let mut theirs = tx(700, TransactionType::Saving, "Savings");
        theirs.goal_id = Some(other.id);
        let mut expense = tx(100, TransactionType::Expense, "Savings");
        expense.goal_id = Some(goal.id);

        let transactions = vec![mine, theirs, expense];
        assert_eq!(
            goal_saved_total(&transactions, goal.id),
            Money::from_units(500)
        );
    }

    #[test]
    fn test_crosses_target_edge() {
        // P3: fires on the crossing, not before, not after
        let target = Money::from_units(1000);
        assert!(!crosses_target(Money::from_units(800), target, Money::from_units(100)));
        assert!(crosses_target(Money::from_units(900), target, Money::from_units(150)));
        assert!(!crosses_target(Money::from_units(1050), target, Money::from_units(50)));
        // Exact landing counts
        assert!(crosses_target(Money::from_units(900), target, Money::from_units(100)));
    }

    #[test]
    fn test_unique_categories_union() {
        let transactions = vec![
            tx(10, TransactionType::Expense, "Food"),
            tx(10, TransactionType::Expense, "Coffee"),
        ];
        let custom = vec!["Coffee".to_string(), "Gym".to_string()];

        let cats = unique_categories(&transactions, &custom);
        assert_eq!(cats.iter().filter(|c| *c == "Coffee").count(), 1);
        assert!(cats.contains(&"Food".to_string()));
        assert!(cats.contains(&"Gym".to_string()));
        assert!(cats.contains(&"General".to_string()));
    }

    #[test]
    fn test_monthly_summary() {
        let month = vec![
            tx(5000, TransactionType::Income, "Salary"),
            tx(1200, TransactionType::Expense, "Food"),
            tx(300, TransactionType::CreditSpend, "Shopping"),
            tx(400, TransactionType::Expense, "Food"),
        ];
        let goals = vec![SavingGoal::new("iPhone", Money::from_units(2000), "#fff")];

        let summary = monthly_summary(&month, &goals);
        assert_eq!(summary.total_income, Money::from_units(5000));
        assert_eq!(summary.total_expense, Money::from_units(1900));
        assert_eq!(summary.net(), Money::from_units(3100));
        assert_eq!(summary.top_categories[0].0, "Food");
        assert_eq!(summary.top_categories[0].1, Money::from_units(1600));
        assert_eq!(summary.goal_count, 1);
    }

    #[test]
    fn test_total_balance_no_accounts() {
        assert_eq!(total_balance(&[], &[]), Money::zero());
    }
}
