use crate::models::AnalysisReport;
use anyhow::Result;
use colored::*;
use std::fs::File;
use std::io::Write;

pub struct Reporter;

fn colorize_status(status: u16) -> ColoredString {
    if status < 300 {
        status.to_string().bright_green()
    } else if status < 400 {
        status.to_string().yellow()
    } else {
        status.to_string().bright_red()
    }
}

fn colorize_score(score: u32) -> ColoredString {
    if score >= 80 {
        score.to_string().bright_green()
    } else if score >= 50 {
        score.to_string().yellow()
    } else {
        score.to_string().bright_red()
    }
}

fn or_none(value: &str) -> ColoredString {
    if value.is_empty() {
        "(none)".dimmed()
    } else {
        value.normal()
    }
}

impl Reporter {
    pub fn print_text_report(report: &AnalysisReport) {
        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "Seolens - SEO Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!(
            "{}: {}",
            "Requested URL".bright_white().bold(),
            report.request.input_url
        );
        println!(
            "{}: {}",
            "Final URL".bright_white().bold(),
            report.request.final_url
        );
        println!(
            "{}: {}",
            "Status".bright_white().bold(),
            colorize_status(report.request.status)
        );
        println!(
            "{}: {}",
            "Content Type".bright_white().bold(),
            or_none(&report.request.content_type)
        );
        println!(
            "{}: {}",
            "Generated At".bright_white().bold(),
            report.generated_at
        );
        println!();

        if let Some(error) = &report.error {
            println!("{} {}", "Error:".bright_red().bold(), error);
            println!("\n{}", "=".repeat(80).bright_blue());
            return;
        }
        let Some(body) = &report.body else {
            println!("\n{}", "=".repeat(80).bright_blue());
            return;
        };

        let page = &body.analysis.page;
        println!("{}", "Page".bright_yellow().bold().underline());
        println!(
            "  Title:            {} ({} chars)",
            or_none(&page.title),
            page.title_length
        );
        println!(
            "  Meta Description: {} ({} chars)",
            or_none(&page.meta_description),
            page.meta_description_length
        );
        println!("  Canonical:        {}", or_none(&page.canonical));
        println!("  Lang:             {}", or_none(&page.lang));
        println!(
            "  Viewport:         {}",
            if page.viewport_present {
                "yes".bright_green()
            } else {
                "no".bright_red()
            }
        );
        println!("  H1 Count:         {}", page.h1_count);
        println!(
            "  Images:           {} ({} without alt)",
            page.images.total,
            if page.images.without_alt > 0 {
                page.images.without_alt.to_string().bright_red()
            } else {
                page.images.without_alt.to_string().bright_green()
            }
        );
        println!("  Word Count:       {}", page.word_count);
        println!();

        println!("{}", "Links".bright_yellow().bold().underline());
        println!("  Total:    {}", body.analysis.links.total);
        println!("  Internal: {}", body.analysis.links.internal);
        println!("  External: {}", body.analysis.links.external);
        println!("  Checked:  {}", body.link_statuses.checked);
        println!(
            "  Broken:   {}",
            if body.link_statuses.broken_count > 0 {
                body.link_statuses.broken_count.to_string().bright_red()
            } else {
                body.link_statuses.broken_count.to_string().bright_green()
            }
        );
        println!();

        println!("{}", "Robots".bright_yellow().bold().underline());
        println!(
            "  robots.txt: {}",
            if body.robots.robots_txt.is_empty() {
                "not found".bright_red()
            } else {
                "found".bright_green()
            }
        );
        println!("  Sitemap:    {}", or_none(&body.robots.sitemap_url));
        println!();

        println!(
            "{} {} / {}",
            "Score:".bright_yellow().bold().underline(),
            colorize_score(body.score.score).bold(),
            body.score.total
        );
        for entry in &body.score.breakdown {
            let points = format!("[{:>2}]", entry.points);
            println!(
                "  {} {}",
                if entry.points > 0 {
                    points.bright_green()
                } else {
                    points.dimmed()
                },
                entry.item
            );
        }
        println!();

        if !body.recommendations.is_empty() {
            println!("{}", "Recommendations".bright_yellow().bold().underline());
            for recommendation in &body.recommendations {
                println!("  - {}", recommendation);
            }
            println!();
        }

        println!("{}", "Keywords".bright_yellow().bold().underline());
        if body.keyword_suggestions.top_keywords.is_empty() {
            println!("  {}", "(no keywords detected)".dimmed());
        } else {
            let top: Vec<String> = body
                .keyword_suggestions
                .top_keywords
                .iter()
                .map(|keyword| format!("{} ({})", keyword.word, keyword.count))
                .collect();
            println!("  Top:  {}", top.join(", "));
        }
        if !body.keyword_suggestions.keyword_gaps.is_empty() {
            println!(
                "  Gaps: {}",
                body.keyword_suggestions.keyword_gaps.join(", ").yellow()
            );
        }
        for suggestion in &body.keyword_suggestions.suggested_content {
            println!(
                "  {} {}",
                format!("{}:", suggestion.action).bright_white().bold(),
                suggestion.reason
            );
            for item in &suggestion.suggestions {
                println!("    - {}", item);
            }
        }

        println!();
        println!("{}", "=".repeat(80).bright_blue());
    }

    pub fn save_json_report(report: &AnalysisReport, filename: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(filename)?;
        file.write_all(json.as_bytes())?;
        println!("Report saved to: {}", filename.bright_green());
        Ok(())
    }
}
