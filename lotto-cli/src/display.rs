use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use serde::Serialize;

use lotto_core::DrawOutcome;
use lotto_core::analysis::{HitDetail, HitReport};
use lotto_core::models::{Combination, Number};

/// Response shape of the draw endpoint the CLI stands in for.
#[derive(Serialize)]
pub struct OutcomeJson<'a> {
    pub draw: &'a Combination,
    pub combinations_submitted: usize,
    pub unique_combinations: usize,
    pub message: String,
    pub hit_report: ReportJson<'a>,
}

#[derive(Serialize)]
pub struct ReportJson<'a> {
    pub six_hits: usize,
    pub five_hits: usize,
    pub four_hits: usize,
    pub total_with_hits: usize,
    pub details: &'a [HitDetail],
}

impl<'a> From<&'a HitReport> for ReportJson<'a> {
    fn from(report: &'a HitReport) -> Self {
        Self {
            six_hits: report.count_for(6),
            five_hits: report.count_for(5),
            four_hits: report.count_for(4),
            total_with_hits: report.total_with_hits(),
            details: report.details(),
        }
    }
}

impl<'a> From<&'a DrawOutcome> for OutcomeJson<'a> {
    fn from(outcome: &'a DrawOutcome) -> Self {
        Self {
            draw: &outcome.draw,
            combinations_submitted: outcome.combinations_submitted,
            unique_combinations: outcome.unique_combinations,
            message: outcome.message(),
            hit_report: ReportJson::from(&outcome.report),
        }
    }
}

fn join_numbers(numbers: &[Number]) -> String {
    if numbers.is_empty() {
        return "—".to_string();
    }
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

fn hits_color(hits: usize, pick_count: usize) -> Color {
    match pick_count.saturating_sub(hits) {
        0 | 1 => Color::Green,
        2 => Color::Yellow,
        _ => Color::White,
    }
}

pub fn display_outcome(outcome: &DrawOutcome) {
    println!("\n🎲 Draw\n");
    println!("  {}", outcome.draw);
    println!("\n{}", outcome.message());
    println!(
        "  Combinations submitted : {}",
        outcome.combinations_submitted
    );
    println!("  Unique combinations    : {}", outcome.unique_combinations);

    display_report(&outcome.report, outcome.draw.len());
}

pub fn display_report(report: &HitReport, pick_count: usize) {
    println!("\n📊 Hits\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Hits", "Combinations"]);

    for (hits, count) in report.totals().collect::<Vec<_>>().into_iter().rev() {
        table.add_row(vec![hits.to_string(), count.to_string()]);
    }
    table.add_row(vec!["Total".to_string(), report.total_with_hits().to_string()]);
    println!("{table}");

    if report.details().is_empty() {
        println!("No combination reached a reporting threshold.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Combination", "Hits", "Hit numbers", "Missed"]);

    for detail in report.details() {
        table.add_row(vec![
            Cell::new(detail.index),
            Cell::new(detail.combination.to_string()),
            Cell::new(detail.hits).fg(hits_color(detail.hits, pick_count)),
            Cell::new(join_numbers(&detail.hit_numbers)),
            Cell::new(join_numbers(&detail.miss_numbers)),
        ]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_core::compute_draw_with;
    use lotto_core::models::Rules;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_join_numbers() {
        assert_eq!(join_numbers(&[1, 12, 36]), " 1 - 12 - 36");
        assert_eq!(join_numbers(&[]), "—");
    }

    #[test]
    fn test_hits_color() {
        assert_eq!(hits_color(6, 7), Color::Green);
        assert_eq!(hits_color(5, 7), Color::Yellow);
        assert_eq!(hits_color(4, 7), Color::White);
    }

    #[test]
    fn test_outcome_json_shape() {
        let raw = vec![vec![1, 2, 3, 4, 5, 6, 7], vec![7, 6, 5, 4, 3, 2, 1]];
        let mut rng = StdRng::seed_from_u64(9);
        let outcome = compute_draw_with(&Rules::default(), &raw, &mut rng).unwrap();

        let json = serde_json::to_value(OutcomeJson::from(&outcome)).unwrap();
        assert_eq!(json["combinations_submitted"], 2);
        assert_eq!(json["unique_combinations"], 1);
        assert_eq!(
            json["message"],
            "Draw generated! It does not match any of your 1 unique combination(s)."
        );

        let report = &json["hit_report"];
        for key in ["six_hits", "five_hits", "four_hits", "total_with_hits"] {
            assert!(report[key].is_u64(), "missing {key}");
        }
        let details = report["details"].as_array().unwrap();
        assert_eq!(details.len() as u64, report["total_with_hits"].as_u64().unwrap());
        for detail in details {
            for key in ["index", "combination", "hits", "hit_numbers", "miss_numbers"] {
                assert!(!detail[key].is_null(), "missing {key}");
            }
        }
    }
}
