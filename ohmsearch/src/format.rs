//! Human-readable rendering of accepted combinations.

use crate::catalog::units::{format_member, format_total};
use crate::search::parallel::ParallelGroup;
use crate::search::series::Match;

/// Render a parallel group as `(v1 || v2 || ...)`.
pub fn format_group(group: &ParallelGroup) -> String {
    let members: Vec<String> = group
        .members()
        .iter()
        .map(|m| format_member(m.ohms))
        .collect();
    format!("({})", members.join(" || "))
}

/// Render a match as its series chain joined by `" + "`, followed by the
/// equivalent total.
pub fn format_match(m: &Match) -> String {
    let chain: Vec<String> = m.groups.iter().map(format_group).collect();
    format!("{} = {}", chain.join(" + "), format_total(m.total))
}

/// Line reported when the full enumeration found nothing inside the band.
pub fn format_no_match(examined: u64) -> String {
    format!("Of {} combinations checked, none were in tolerance.", examined)
}
