//! Parse → normalize → classify → aggregate.

pub mod aggregate;
pub mod normalizer;
pub mod parser;

pub use aggregate::{LabelCounts, ResultSet};
pub use normalizer::normalize;
pub use parser::parse_records;

use tracing::{error, info, warn};

use crate::classifier::SentimentClassifier;
use crate::error::AnalyzeError;

/// Run one batch of pasted lines through the classifier.
///
/// Runs synchronously to completion. Nothing is returned for blank input,
/// and an inference failure discards the whole batch.
///
/// # Errors
/// [`AnalyzeError::EmptyInput`] for blank input, [`AnalyzeError::Inference`]
/// when the classifier fails.
pub fn analyze(input: &str, classifier: &SentimentClassifier) -> Result<ResultSet, AnalyzeError> {
    if input.trim().is_empty() {
        warn!("Analyze requested with empty input");
        return Err(AnalyzeError::EmptyInput);
    }

    let records = parse_records(input);
    let normalized: Vec<String> = records.iter().map(|r| normalize(&r.raw_text)).collect();
    info!("Parsed {} records for classification", records.len());

    let labels = classifier
        .classify(&normalized)
        .inspect_err(|e| error!("Classification failed: {e}"))?;

    let result = ResultSet::assemble(records, labels)?;
    let counts = result.counts();
    info!(
        positive = counts.positive,
        negative = counts.negative,
        "Classified {} records",
        result.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Label;
    use crate::error::InferenceError;
    use crate::test_support::{keyword_classifier, mismatched_classifier};

    #[test]
    fn test_analyze_end_to_end() {
        let classifier = keyword_classifier();
        let result = analyze("1, great phone\n2, terrible battery", &classifier).unwrap();

        let rows: Vec<(&str, &str, Label)> = result
            .rows()
            .iter()
            .map(|p| (p.identifier.as_str(), p.raw_text.as_str(), p.label))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("1", "great phone", Label::Positive),
                ("2", "terrible battery", Label::Negative),
            ]
        );
        assert_eq!(result.counts(), LabelCounts { positive: 1, negative: 1 });
    }

    #[test]
    fn test_analyze_classifies_normalized_but_reports_raw_text() {
        let classifier = keyword_classifier();
        let result = analyze("7, @bob I LOVE it!!! http://t.co/x", &classifier).unwrap();
        assert_eq!(result.rows()[0].raw_text, "@bob I LOVE it!!! http://t.co/x");
        assert_eq!(result.rows()[0].label, Label::Positive);
    }

    #[test]
    fn test_analyze_unknown_identifier() {
        let classifier = keyword_classifier();
        let result = analyze("I hate this", &classifier).unwrap();
        assert_eq!(result.rows()[0].identifier, "Unknown");
        assert_eq!(result.rows()[0].label, Label::Negative);
    }

    #[test]
    fn test_analyze_rejects_blank_input() {
        let classifier = keyword_classifier();
        assert!(matches!(
            analyze("   \n\t ", &classifier),
            Err(AnalyzeError::EmptyInput)
        ));
        assert!(matches!(analyze("", &classifier), Err(AnalyzeError::EmptyInput)));
    }

    #[test]
    fn test_analyze_surfaces_inference_error() {
        let classifier = mismatched_classifier();
        let err = analyze("1, great", &classifier).unwrap_err();
        assert!(matches!(
            err,
            AnalyzeError::Inference(InferenceError::ShapeMismatch { expected: 2, actual: 3 })
        ));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn result_order_matches_input_order(
                words in proptest::collection::vec(
                    prop_oneof![Just("great"), Just("terrible"), Just("love"), Just("meh")],
                    1..50,
                )
            ) {
                let classifier = keyword_classifier();
                let input = words
                    .iter()
                    .enumerate()
                    .map(|(i, w)| format!("{i}, {w}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                let result = analyze(&input, &classifier).unwrap();

                prop_assert_eq!(result.len(), words.len());
                for (i, (row, word)) in result.rows().iter().zip(&words).enumerate() {
                    prop_assert_eq!(&row.identifier, &i.to_string());
                    prop_assert_eq!(row.raw_text.as_str(), *word);
                    let expected = if matches!(*word, "great" | "love") {
                        Label::Positive
                    } else {
                        Label::Negative
                    };
                    prop_assert_eq!(row.label, expected);
                }
                prop_assert_eq!(result.counts().total(), words.len());
            }
        }
    }
}
