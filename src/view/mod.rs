//! Server-rendered dashboard page.

pub mod chart;

use askama::Template;

pub use chart::{Bar, BarChart};

use crate::domain::Prediction;
use crate::pipeline::ResultSet;

pub const PAGE_TITLE: &str = "Twitter Sentiment Analysis Dashboard";
pub const INPUT_PLACEHOLDER: &str =
    "Example:\n123, I love this phone!\n456, I hate the battery life.";
pub const EMPTY_INPUT_WARNING: &str =
    "Please enter at least one tweet in the correct format (ID, Tweet).";
pub const EXPORT_FILENAME: &str = "tweet_sentiment_with_userid.csv";

/// Results block shown under the form.
pub struct ResultsView<'a> {
    pub rows: &'a [Prediction],
    pub chart: BarChart,
}

impl<'a> ResultsView<'a> {
    pub fn new(result: &'a ResultSet) -> Self {
        Self {
            rows: result.rows(),
            chart: BarChart::from_counts(&result.counts()),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub input: &'a str,
    pub warning: Option<&'a str>,
    pub error: Option<String>,
    pub results: Option<ResultsView<'a>>,
    pub export_filename: &'a str,
}

impl<'a> DashboardPage<'a> {
    /// Empty form.
    pub fn blank() -> Self {
        Self::with_input("")
    }

    fn with_input(input: &'a str) -> Self {
        Self {
            title: PAGE_TITLE,
            placeholder: INPUT_PLACEHOLDER,
            input,
            warning: None,
            error: None,
            results: None,
            export_filename: EXPORT_FILENAME,
        }
    }

    /// Form re-filled with `input`, followed by the table, chart and export button.
    pub fn with_results(input: &'a str, result: &'a ResultSet) -> Self {
        Self {
            results: Some(ResultsView::new(result)),
            ..Self::with_input(input)
        }
    }

    pub fn with_warning(input: &'a str, warning: &'a str) -> Self {
        Self {
            warning: Some(warning),
            ..Self::with_input(input)
        }
    }

    pub fn with_error(input: &'a str, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::with_input(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Label, Record};

    fn sample() -> ResultSet {
        ResultSet::from_predictions(vec![
            Record::new("1", "great <b>phone</b>").into_prediction(Label::Positive),
            Record::new("2", "terrible battery").into_prediction(Label::Negative),
        ])
    }

    #[test]
    fn test_blank_page_has_form_and_no_results() {
        let html = DashboardPage::blank().render().unwrap();
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("name=\"tweets\""));
        assert!(html.contains("Analyze Tweets"));
        assert!(!html.contains("Sentiment Predictions"));
    }

    #[test]
    fn test_results_page_renders_table_chart_and_export() {
        let result = sample();
        let html = DashboardPage::with_results("1, great", &result).render().unwrap();
        assert!(html.contains("Sentiment Predictions"));
        assert!(html.contains("<td>terrible battery</td>"));
        assert!(html.contains("<svg"));
        assert!(html.contains("fill=\"green\""));
        assert!(html.contains("fill=\"red\""));
        assert!(html.contains("action=\"/export\""));
        assert!(html.contains("Download Results as CSV"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let result = sample();
        let html = DashboardPage::with_results("<script>", &result).render().unwrap();
        assert!(!html.contains("<b>phone</b>"));
        assert!(html.contains("&lt;b&gt;phone&lt;/b&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_warning_page() {
        let html = DashboardPage::with_warning("", EMPTY_INPUT_WARNING)
            .render()
            .unwrap();
        assert!(html.contains("class=\"warning\""));
        assert!(html.contains("Please enter at least one tweet"));
        assert!(!html.contains("<svg"));
    }
}
