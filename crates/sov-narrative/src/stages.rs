//! The three narrative stages and the prompts they send.

use sov_sentiment::{SoVResult, VideoRecord};

/// Videos listed by view count in the data brief.
const TOP_VIDEOS_IN_BRIEF: usize = 5;

/// What the run was about; shared by every stage and the report header.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    pub search_query: String,
    pub target_brand: String,
    pub competitor_brands: Vec<String>,
}

/// Stages run in this order; each sees the previous stage's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DataCollection,
    SentimentAnalysis,
    StrategicInsights,
}

impl Stage {
    pub const ALL: [Stage; 3] = [
        Stage::DataCollection,
        Stage::SentimentAnalysis,
        Stage::StrategicInsights,
    ];

    #[must_use]
    pub fn role(self) -> &'static str {
        match self {
            Stage::DataCollection => "YouTube Data Collector",
            Stage::SentimentAnalysis => "Sentiment Analysis Expert",
            Stage::StrategicInsights => "Marketing Insights Specialist",
        }
    }

    fn backstory(self) -> &'static str {
        match self {
            Stage::DataCollection => {
                "You are an expert in YouTube content analysis. You summarize videos, \
                 comments and engagement metrics into a clear picture of a product \
                 category on YouTube."
            }
            Stage::SentimentAnalysis => {
                "You are a sentiment analysis expert with deep knowledge of brand \
                 perception and Share of Voice. You interpret mentions, sentiment and \
                 engagement into insights a marketing team can act on."
            }
            Stage::StrategicInsights => {
                "You are a marketing strategist who specializes in competitive analysis \
                 and brand positioning. You turn data into practical recommendations."
            }
        }
    }

    fn goal(self, ctx: &AnalysisContext) -> String {
        match self {
            Stage::DataCollection => format!(
                "Describe the YouTube landscape for the search \"{}\"",
                ctx.search_query
            ),
            Stage::SentimentAnalysis => format!(
                "Interpret Share of Voice and sentiment for {} against its competitors",
                ctx.target_brand
            ),
            Stage::StrategicInsights => format!(
                "Give {}'s marketing team actionable recommendations",
                ctx.target_brand
            ),
        }
    }

    fn task(self, ctx: &AnalysisContext) -> String {
        match self {
            Stage::DataCollection => "Using the data brief, describe:\n\
                 1. The kind of videos ranking for this search (topics, channels, reach)\n\
                 2. How much comment activity the corpus contains\n\
                 3. Which brands are discussed at all\n\
                 Do not invent numbers that are not in the brief."
                .to_string(),
            Stage::SentimentAnalysis => format!(
                "Using the data brief and the landscape summary, analyze:\n\
                 1. Share of Voice for every brand\n\
                 2. The positive/negative split per brand\n\
                 3. Positive Share of Voice\n\
                 4. Where {} stands against its competitors\n\
                 Quote percentages exactly as given in the brief.",
                ctx.target_brand
            ),
            Stage::StrategicInsights => format!(
                "Based on the analysis, provide:\n\
                 1. An assessment of {}'s current position\n\
                 2. Competitive advantages to build on\n\
                 3. Content strategy recommendations for YouTube\n\
                 4. Concrete next steps for the marketing team",
                ctx.target_brand
            ),
        }
    }

    #[must_use]
    pub fn expected_output(self) -> &'static str {
        match self {
            Stage::DataCollection => "A short overview of the video corpus and brand presence",
            Stage::SentimentAnalysis => "A Share of Voice and sentiment analysis",
            Stage::StrategicInsights => "Strategic insights and actionable recommendations",
        }
    }

    /// System prompt carrying the stage persona.
    #[must_use]
    pub fn system_prompt(self, ctx: &AnalysisContext) -> String {
        format!(
            "You are the {}. {}\nYour goal: {}.",
            self.role(),
            self.backstory(),
            self.goal(ctx)
        )
    }

    /// User prompt: the data brief, the previous stage's output, then the task.
    #[must_use]
    pub fn prompt(self, ctx: &AnalysisContext, brief: &str, previous: Option<&str>) -> String {
        let mut sections = vec![format!("## Data brief\n\n{brief}")];
        if let Some(previous) = previous {
            sections.push(format!("## Previous analysis\n\n{}\n", previous.trim()));
        }
        sections.push(format!("## Task\n\n{}", self.task(ctx)));
        sections.push(format!("Expected output: {}.", self.expected_output()));
        sections.join("\n")
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.role())
    }
}

/// Plain-text summary of the corpus and the computed Share of Voice.
///
/// Every number the model sees comes from here.
#[must_use]
pub fn data_brief(ctx: &AnalysisContext, videos: &[VideoRecord], result: &SoVResult) -> String {
    let mut lines = vec![
        format!("Search query: {}", ctx.search_query),
        format!("Target brand: {}", ctx.target_brand),
        format!("Competitors: {}", ctx.competitor_brands.join(", ")),
        format!("Videos analyzed: {}", result.videos_analyzed),
        format!("Comments analyzed: {}", result.total_comments_scanned),
        format!("Total brand mentions: {}", result.total_mentions()),
        String::new(),
    ];

    let mut top: Vec<&VideoRecord> = videos.iter().collect();
    top.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    if !top.is_empty() {
        lines.push("Most viewed videos:".to_string());
        lines.extend(top.iter().take(TOP_VIDEOS_IN_BRIEF).map(|video| {
            format!(
                "- \"{}\" by {} ({} views, {} comments fetched)",
                video.title,
                video.channel_title,
                video.view_count,
                video.comments.len()
            )
        }));
        lines.push(String::new());
    }

    lines.push("Share of Voice by brand:".to_string());
    lines.extend(result.brands.iter().map(|b| {
        format!(
            "- {}: {:.1}% SoV, {} mentions ({} positive, {} negative), {:.1}% positive SoV",
            b.brand,
            b.sov_percentage,
            b.total_mentions,
            b.positive_mentions,
            b.negative_mentions,
            b.positive_sov_percentage
        )
    }));

    let mut brief = lines.join("\n");
    brief.push('\n');
    brief
}

#[cfg(test)]
mod tests {
    use sov_sentiment::{compute, Comment};

    use super::*;

    fn ctx() -> AnalysisContext {
        AnalysisContext {
            search_query: "smart fan".to_string(),
            target_brand: "atomberg".to_string(),
            competitor_brands: vec!["crompton".to_string(), "havells".to_string()],
        }
    }

    fn videos() -> Vec<VideoRecord> {
        vec![
            VideoRecord {
                video_id: "a".to_string(),
                title: "Low views".to_string(),
                channel_title: "Small".to_string(),
                view_count: 10,
                comments: vec![Comment::new("atomberg is great")],
                ..VideoRecord::default()
            },
            VideoRecord {
                video_id: "b".to_string(),
                title: "High views".to_string(),
                channel_title: "Big".to_string(),
                view_count: 9000,
                comments: vec![Comment::new("crompton broke"), Comment::new("meh")],
                ..VideoRecord::default()
            },
        ]
    }

    #[test]
    fn brief_lists_every_brand_with_rounded_numbers() {
        let videos = videos();
        let result = compute(&videos, "atomberg", &["crompton", "havells"]);
        let brief = data_brief(&ctx(), &videos, &result);

        assert!(brief.contains("Videos analyzed: 2"));
        assert!(brief.contains("Comments analyzed: 3"));
        assert!(brief.contains("- atomberg: 50.0% SoV, 1 mentions (1 positive, 0 negative)"));
        assert!(brief.contains("- havells: 0.0% SoV, 0 mentions"));
    }

    #[test]
    fn brief_orders_videos_by_views() {
        let videos = videos();
        let result = compute(&videos, "atomberg", &["crompton"]);
        let brief = data_brief(&ctx(), &videos, &result);
        let high = brief.find("High views").unwrap();
        let low = brief.find("Low views").unwrap();
        assert!(high < low, "most viewed video should come first:\n{brief}");
    }

    #[test]
    fn system_prompt_names_target_brand() {
        let prompt = Stage::StrategicInsights.system_prompt(&ctx());
        assert!(prompt.starts_with("You are the Marketing Insights Specialist."));
        assert!(prompt.contains("atomberg's marketing team"));
    }

    #[test]
    fn prompt_includes_previous_stage_output() {
        let prompt = Stage::SentimentAnalysis.prompt(&ctx(), "BRIEF", Some("  landscape  "));
        assert!(prompt.contains("## Data brief\n\nBRIEF"));
        assert!(prompt.contains("## Previous analysis\n\nlandscape\n"));
        assert!(prompt.contains("Where atomberg stands"));
    }

    #[test]
    fn first_stage_prompt_has_no_previous_section() {
        let prompt = Stage::DataCollection.prompt(&ctx(), "BRIEF", None);
        assert!(!prompt.contains("Previous analysis"));
    }

    #[test]
    fn stages_run_collector_first() {
        assert_eq!(Stage::ALL[0], Stage::DataCollection);
        assert_eq!(Stage::ALL[2], Stage::StrategicInsights);
    }
}
