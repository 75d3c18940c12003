// src/core/composer.rs

use crate::core::aggregate::Aggregation;
use crate::models::{ColumnPlan, DateColumn, Roster, Session, Sheet};
use crate::utils::format_hhmm;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Output sheet plus the matching counters of the fill pass.
#[derive(Debug, Clone, Default)]
pub struct Composition {
    pub sheet: Sheet,
    pub matched: usize,
    pub unmatched_roster: usize,
    pub unmatched_source: usize,
    pub cells_filled: usize,
}

/// Merge roster and aggregated attendance according to the plan.
pub fn compose(reference: &Sheet, roster: &Roster, plan: &ColumnPlan, data: &Aggregation) -> Composition {
    let mut out = match plan {
        ColumnPlan::HeaderInferred { columns } => compose_in_place(reference, roster, columns, data),
        ColumnPlan::RangeDriven {
            copied,
            dates,
            columns,
        } => compose_by_range(reference, roster, copied, dates, columns, data),
    };

    out.unmatched_source = count_unclaimed(roster, data);
    out
}

/// Header-inferred: the reference sheet is kept as is and the first session of
/// each day (in source order) is written into its login/logout pair.
fn compose_in_place(
    reference: &Sheet,
    roster: &Roster,
    columns: &[DateColumn],
    data: &Aggregation,
) -> Composition {
    let mut out = Composition {
        sheet: reference.clone(),
        ..Default::default()
    };

    for employee in &roster.entries {
        let Some(sessions) = data.resolve_name(&employee.name).and_then(|n| data.sessions_for(n)) else {
            out.unmatched_roster += 1;
            continue;
        };
        out.matched += 1;

        for col in columns {
            let Some(key) = col.key else { continue };

            // input order, not calendar order: `1/10` may match several years
            let first: Option<&Session> = sessions
                .iter()
                .filter(|(date, _)| key.matches(**date))
                .filter_map(|(_, list)| list.first())
                .min_by_key(|s| s.seq);

            let Some(session) = first else { continue };

            if let Some(login) = session.login {
                out.sheet.set_text(employee.row, col.login_col, format_hhmm(login.time()));
                out.cells_filled += 1;
            }

            // a logout that rolled into the next day does not belong here
            if let Some(logout) = session.logout
                && key.matches(logout.date())
            {
                out.sheet.set_text(employee.row, col.logout_col, format_hhmm(logout.time()));
                out.cells_filled += 1;
            }
        }
    }

    out
}

/// Range-driven: header + one row per roster entry, copied columns first.
fn compose_by_range(
    reference: &Sheet,
    roster: &Roster,
    copied: &[u32],
    dates: &[NaiveDate],
    columns: &[DateColumn],
    data: &Aggregation,
) -> Composition {
    let mut out = Composition {
        sheet: Sheet::new(reference.name.clone()),
        ..Default::default()
    };

    // ---------------------------
    // Header
    // ---------------------------
    for (i, &src) in copied.iter().enumerate() {
        out.sheet.set(0, i as u32, reference.get(0, src).clone());
    }
    for col in columns {
        out.sheet.set_text(0, col.login_col, format!("{} Login", col.label));
        out.sheet.set_text(0, col.logout_col, format!("{} Logout", col.label));
        if let Some(h) = col.hours_col {
            out.sheet.set_text(0, h, format!("{} Hours", col.label));
        }
    }

    // ---------------------------
    // Roster rows
    // ---------------------------
    for (idx, employee) in roster.entries.iter().enumerate() {
        let row = idx as u32 + 1;

        for (i, &src) in copied.iter().enumerate() {
            out.sheet.set(row, i as u32, reference.get(employee.row, src).clone());
        }

        let Some(days) = data.resolve_name(&employee.name).and_then(|n| data.records_for(n)) else {
            out.unmatched_roster += 1;
            continue;
        };
        out.matched += 1;

        for (date, col) in dates.iter().zip(columns) {
            let Some(record) = days.get(date) else { continue };

            if let Some(login) = record.login {
                out.sheet.set_text(row, col.login_col, format_hhmm(login.time()));
                out.cells_filled += 1;
            }

            if let Some(logout) = record.logout
                && logout.date() == *date
            {
                out.sheet.set_text(row, col.logout_col, format_hhmm(logout.time()));
                out.cells_filled += 1;
            }

            if let (Some(hours), Some(h_col)) = (record.hours, col.hours_col) {
                out.sheet.set_number(row, h_col, hours);
                out.cells_filled += 1;
            }
        }
    }

    out
}

/// Source employees that no roster row resolved to; their data is dropped.
fn count_unclaimed(roster: &Roster, data: &Aggregation) -> usize {
    let claimed: HashSet<&str> = roster
        .entries
        .iter()
        .filter_map(|e| data.resolve_name(&e.name))
        .collect();

    data.employees()
        .iter()
        .filter(|n| !claimed.contains(n.as_str()))
        .count()
}
