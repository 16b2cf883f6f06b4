//! Markdown rendering of a narrative run.

use chrono::{DateTime, Utc};
use sov_sentiment::SoVResult;

use crate::pipeline::StageOutput;
use crate::stages::{AnalysisContext, Stage};

/// File name of the saved report inside the output directory.
pub const REPORT_FILE_NAME: &str = "narrative_report.md";

/// Capitalize the first letter of every whitespace-separated word.
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn section_title(stage: Stage) -> &'static str {
    match stage {
        Stage::DataCollection => "Data Collection",
        Stage::SentimentAnalysis => "Sentiment Analysis",
        Stage::StrategicInsights => "Strategic Insights",
    }
}

/// Render the full report: header, numeric table, one section per stage,
/// then next steps.
#[must_use]
pub fn render_report(
    ctx: &AnalysisContext,
    model: &str,
    result: &SoVResult,
    stages: &[StageOutput],
    generated_at: DateTime<Utc>,
) -> String {
    let target = title_case(&ctx.target_brand);
    let competitors: Vec<String> = ctx.competitor_brands.iter().map(|c| title_case(c)).collect();

    let mut lines = vec![
        "# YouTube Share of Voice Report".to_string(),
        String::new(),
        format!(
            "**Generated:** {}",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("**Model:** {model}"),
        format!("**Search query:** {}", ctx.search_query),
        format!("**Target brand:** {target}"),
        format!("**Competitors:** {}", competitors.join(", ")),
        String::new(),
        "## Share of Voice".to_string(),
        String::new(),
        format!(
            "Videos analyzed: {} | Comments analyzed: {}",
            result.videos_analyzed, result.total_comments_scanned
        ),
        String::new(),
        "| Brand | Mentions | Positive | Negative | SoV | Positive SoV |".to_string(),
        "|---|---:|---:|---:|---:|---:|".to_string(),
    ];
    lines.extend(result.brands.iter().map(|b| {
        format!(
            "| {} | {} | {} | {} | {:.1}% | {:.1}% |",
            title_case(&b.brand),
            b.total_mentions,
            b.positive_mentions,
            b.negative_mentions,
            b.sov_percentage,
            b.positive_sov_percentage
        )
    }));
    lines.push(String::new());

    for output in stages {
        lines.push(format!("## {}", section_title(output.stage)));
        lines.push(String::new());
        lines.push(output.text.trim().to_string());
        lines.push(String::new());
    }

    lines.extend([
        "## Next Steps".to_string(),
        String::new(),
        format!("1. Review the recommendations with the {target} marketing team"),
        "2. Track Share of Voice on a regular schedule".to_string(),
        "3. Watch how competitors position themselves".to_string(),
        "4. Measure the impact of content changes on these numbers".to_string(),
    ]);

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use sov_sentiment::{compute, Comment, VideoRecord};

    use super::*;

    fn ctx() -> AnalysisContext {
        AnalysisContext {
            search_query: "smart fan".to_string(),
            target_brand: "atomberg".to_string(),
            competitor_brands: vec!["crompton".to_string(), "usha".to_string()],
        }
    }

    fn result() -> SoVResult {
        let videos = vec![VideoRecord {
            video_id: "v".to_string(),
            comments: vec![
                Comment::new("atomberg is great"),
                Comment::new("atomberg is bad"),
                Comment::new("crompton is fine"),
            ],
            ..VideoRecord::default()
        }];
        compute(&videos, "atomberg", &["crompton", "usha"])
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("atomberg"), "Atomberg");
        assert_eq!(title_case("v guard  fans"), "V Guard Fans");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn report_contains_header_and_table() {
        let at = Utc.with_ymd_and_hms(2024, 7, 1, 12, 30, 0).unwrap();
        let report = render_report(&ctx(), "gemma3:1b", &result(), &[], at);

        assert!(report.starts_with("# YouTube Share of Voice Report"));
        assert!(report.contains("**Generated:** 2024-07-01 12:30:00 UTC"));
        assert!(report.contains("**Model:** gemma3:1b"));
        assert!(report.contains("**Competitors:** Crompton, Usha"));
        assert!(report.contains("| Atomberg | 2 | 1 | 1 | 66.7% | 100.0% |"));
        assert!(report.contains("| Usha | 0 | 0 | 0 | 0.0% | 0.0% |"));
        assert!(report.contains("## Next Steps"));
        assert!(report.ends_with("content changes on these numbers\n"));
    }

    #[test]
    fn report_renders_stage_sections_in_order() {
        let at = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let stages = vec![
            StageOutput {
                stage: Stage::DataCollection,
                text: "landscape".to_string(),
            },
            StageOutput {
                stage: Stage::StrategicInsights,
                text: "  do more reviews \n".to_string(),
            },
        ];
        let report = render_report(&ctx(), "m", &result(), &stages, at);

        let data = report.find("## Data Collection\n\nlandscape").unwrap();
        let insights = report
            .find("## Strategic Insights\n\ndo more reviews\n")
            .unwrap();
        let next = report.find("## Next Steps").unwrap();
        assert!(data < insights && insights < next);
        assert!(!report.contains("## Sentiment Analysis"));
    }
}
