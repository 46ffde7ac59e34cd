//! Interactive main menu
//!
//! One numbered command per line. Each command runs to completion before the
//! menu is shown again; bad input is reported and the menu comes back.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::display::{
    format_balance, format_category_summary, format_count, format_monthly_summary,
    format_record_list, DisplayStyle,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{TransactionKind, YearMonth};
use crate::services::Session;
use crate::storage::LedgerStore;

use super::console::Console;

/// A main-menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddIncome,
    AddExpense,
    ViewAll,
    MonthlySummary,
    CategorySummary,
    Count,
    Balance,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 8] = [
        Self::AddIncome,
        Self::AddExpense,
        Self::ViewAll,
        Self::MonthlySummary,
        Self::CategorySummary,
        Self::Count,
        Self::Balance,
        Self::Exit,
    ];

    /// Menu number shown to the user
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).map_or(0, |i| i + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddIncome => "Add Income",
            Self::AddExpense => "Add Expense",
            Self::ViewAll => "View All Transactions",
            Self::MonthlySummary => "Monthly Summary",
            Self::CategorySummary => "Category-wise Summary",
            Self::Count => "View Transaction Count",
            Self::Balance => "View Current Balance",
            Self::Exit => "Logout & Exit",
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuCommand {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: usize = s
            .trim()
            .parse()
            .map_err(|_| TrackerError::Parse(format!("'{}' is not a menu number", s.trim())))?;

        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| TrackerError::Parse(format!("No menu entry {}", number)))
    }
}

/// Whether the menu loop should keep going after a command
enum Flow {
    Continue,
    Exit,
}

/// Run the menu until the user logs out or input ends, then save the ledger
pub fn run_menu<R, W, S>(
    console: &mut Console<R, W>,
    mut session: Session<S>,
    style: &DisplayStyle,
) -> TrackerResult<()>
where
    R: BufRead,
    W: Write,
    S: LedgerStore,
{
    for skipped in session.skipped() {
        console.say(format!(
            "Warning: skipped line {} of your ledger ({})",
            skipped.line_number, skipped.reason
        ))?;
    }

    loop {
        show_menu(console, &session, style)?;

        let Some(choice) = console.prompt("Enter your choice: ")? else {
            break;
        };

        let command = match choice.parse::<MenuCommand>() {
            Ok(command) => command,
            Err(_) => {
                console.say("Invalid choice. Try again.")?;
                continue;
            }
        };

        match run_command(console, &mut session, style, command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            // The console itself failed; save what we have and give up
            Err(e @ TrackerError::Io(_)) => {
                session.save()?;
                return Err(e);
            }
            Err(e) => console.say(e)?,
        }
    }

    let username = session.username().to_string();
    match session.close() {
        Ok(()) => console.say("Logged out. Thank you for using Finance Tracker!")?,
        Err(e) => console.say(format!(
            "Could not save transactions for {}: {}",
            username, e
        ))?,
    }
    Ok(())
}

fn show_menu<R: BufRead, W: Write, S: LedgerStore>(
    console: &mut Console<R, W>,
    session: &Session<S>,
    style: &DisplayStyle,
) -> TrackerResult<()> {
    console.say("")?;
    console.say("===== PERSONAL FINANCE TRACKER =====")?;
    console.say(format!("Logged in as: {}", session.username()))?;
    console.say(format_balance(session.balance(), style))?;
    console.say("------------------------------------")?;
    for command in MenuCommand::ALL {
        console.say(command)?;
    }
    Ok(())
}

fn run_command<R: BufRead, W: Write, S: LedgerStore>(
    console: &mut Console<R, W>,
    session: &mut Session<S>,
    style: &DisplayStyle,
    command: MenuCommand,
) -> TrackerResult<Flow> {
    match command {
        MenuCommand::AddIncome => add_record(console, session, TransactionKind::Income)?,
        MenuCommand::AddExpense => add_record(console, session, TransactionKind::Expense)?,
        MenuCommand::ViewAll => console.write(format_record_list(session.records(), style))?,
        MenuCommand::MonthlySummary => {
            let Some(period) = prompt_period(console)? else {
                return Ok(Flow::Exit);
            };
            console.write(format_monthly_summary(&session.monthly_summary(period), style))?;
        }
        MenuCommand::CategorySummary => {
            console.write(format_category_summary(&session.category_summary(), style))?
        }
        MenuCommand::Count => console.say(format_count(session.count()))?,
        MenuCommand::Balance => console.say(format_balance(session.balance(), style))?,
        MenuCommand::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn add_record<R: BufRead, W: Write, S: LedgerStore>(
    console: &mut Console<R, W>,
    session: &mut Session<S>,
    kind: TransactionKind,
) -> TrackerResult<()> {
    let Some(category) = console.prompt("Enter category: ")? else {
        return Ok(());
    };
    let Some(amount) = console.prompt("Enter amount: ")? else {
        return Ok(());
    };
    let amount = parse_amount(&amount)?;
    let Some(description) = console.prompt("Enter description: ")? else {
        return Ok(());
    };

    match session.add(kind, &category, amount, &description) {
        Ok(_) => console.say(format!("{} added successfully!", kind)),
        // Kept in memory; the logout save writes it again
        Err(TrackerError::Storage(e)) => console.say(format!(
            "{} recorded but could not be saved yet: {}",
            kind, e
        )),
        Err(e) => Err(e),
    }
}

fn prompt_period<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> TrackerResult<Option<YearMonth>> {
    let Some(month) = console.prompt("Enter month (1-12): ")? else {
        return Ok(None);
    };
    let month: u32 = month
        .trim()
        .parse()
        .map_err(|_| TrackerError::Parse(format!("'{}' is not a month number", month.trim())))?;

    let Some(year) = console.prompt("Enter year (e.g. 2025): ")? else {
        return Ok(None);
    };
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| TrackerError::Parse(format!("'{}' is not a year", year.trim())))?;

    YearMonth::new(year, month).map(Some)
}

/// Parse an amount typed by the user
pub fn parse_amount(input: &str) -> TrackerResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| TrackerError::Parse(format!("'{}' is not a valid amount", input.trim())))
}
