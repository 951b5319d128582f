use crate::render::{format_epa, format_f64_3};
use crate::views::epa::{EpaAtTime, EpaPanel, rank_label};
use crate::views::opr::OprPanel;
use crate::views::ranks::{ClassifyReport, RanksReport, TeamStanding};

pub fn render_epa_text(panel: &EpaPanel) -> String {
    let mut out = String::new();
    out.push_str(&format!("Team {} EPA ({} season)\n", panel.team, panel.season));
    out.push_str(&format!("EPA: {}\n", format_epa(panel.current_epa)));
    out.push_str(&format!("As of: {}\n", panel.as_of));
    out.push_str(&format!("History points: {}\n", panel.points));
    out.push_str(&format!("{}\n", rank_label(panel.standing.as_ref())));
    if let Some(standing) = &panel.standing {
        push_standing(&mut out, standing);
    }
    out
}

pub fn render_epa_at_text(point: &EpaAtTime) -> String {
    format!(
        "Team {} EPA at {}: {}\n",
        point.team,
        crate::render::figure::timestamp_label(&point.time.to_string()),
        format_epa(point.epa)
    )
}

pub fn render_opr_text(panel: &OprPanel) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "OPR {} at {} ({} season)\n",
        panel.query.statistic.as_str(),
        panel.query.event.as_str(),
        panel.query.season
    ));
    if panel.rows.is_empty() {
        out.push_str("No OPR values for this event.\n");
        return out;
    }
    if panel.rows.len() < panel.teams_at_event {
        out.push_str(&format!(
            "Showing {} of {} teams\n",
            panel.rows.len(),
            panel.teams_at_event
        ));
    }
    out.push_str("pos\tteam\topr\n");
    for row in &panel.rows {
        out.push_str(&format!("{}\t{}\t{}\n", row.position, row.team, format_f64_3(row.value)));
    }
    out
}

pub fn render_ranks_text(report: &RanksReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "EPA world ranks ({} season, {} teams)\n",
        report.season, report.ranked_teams
    ));
    if let Some(standing) = &report.standing {
        out.push_str(&format!("Team {}: World Rank: #{}\n", standing.team, standing.rank));
        push_standing(&mut out, standing);
    }
    if !report.leaderboard.is_empty() {
        out.push_str("rank\tteam\tepa\n");
        for row in &report.leaderboard {
            let score = row.score.map(format_epa).unwrap_or_else(|| "-".to_string());
            out.push_str(&format!("{}\t{}\t{}\n", row.rank, row.team, score));
        }
    }
    out
}

pub fn render_classify_text(report: &ClassifyReport) -> String {
    format!(
        "Percentile {} -> {} ({})\n",
        format_f64_3(report.percentile),
        report.bucket,
        report.style.label()
    )
}

pub fn render_unavailable_text(view: &str, reason: &str) -> String {
    format!("{view}: data unavailable\nReason: {reason}\n")
}

fn push_standing(out: &mut String, standing: &TeamStanding) {
    out.push_str(&format!(
        "Percentile: {} of {} teams\n",
        format_f64_3(standing.percentile),
        standing.ranked_teams
    ));
    out.push_str(&format!(
        "Bucket: {} ({})\n",
        standing.bucket,
        standing.style.label()
    ));
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/text.rs"]
mod tests;
