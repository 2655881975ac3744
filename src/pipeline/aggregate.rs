use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::domain::{Label, Prediction, Record};
use crate::error::{ExportError, InferenceError};

/// Column headers of the downloadable CSV.
pub const CSV_HEADERS: [&str; 3] = ["User ID", "Tweet", "Sentiment"];

/// Number of records per label.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelCounts {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
}

impl LabelCounts {
    pub fn get(&self, label: Label) -> usize {
        match label {
            Label::Positive => self.positive,
            Label::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// `(label, count)` pairs in display order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (Label, usize)> + '_ {
        Label::ALL.into_iter().map(|label| (label, self.get(label)))
    }

    fn record(&mut self, label: Label) {
        match label {
            Label::Positive => self.positive += 1,
            Label::Negative => self.negative += 1,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CsvRow<'a> {
    #[serde(rename = "User ID")]
    identifier: std::borrow::Cow<'a, str>,
    #[serde(rename = "Tweet")]
    raw_text: std::borrow::Cow<'a, str>,
    #[serde(rename = "Sentiment")]
    label: Label,
}

/// Predictions in input order plus their label frequencies.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    rows: Vec<Prediction>,
    counts: LabelCounts,
}

impl ResultSet {
    /// Pair each record with the label at the same position.
    ///
    /// The two sequences must have the same length; a shorter label list
    /// means the classifier dropped inputs and the rows would no longer line
    /// up with what the user submitted.
    pub fn assemble(records: Vec<Record>, labels: Vec<Label>) -> Result<Self, InferenceError> {
        if records.len() != labels.len() {
            return Err(InferenceError::LengthMismatch {
                expected: records.len(),
                actual: labels.len(),
            });
        }

        let rows = records
            .into_iter()
            .zip(labels)
            .map(|(record, label)| record.into_prediction(label))
            .collect();
        Ok(Self::from_predictions(rows))
    }

    pub fn from_predictions(rows: Vec<Prediction>) -> Self {
        let mut counts = LabelCounts::default();
        for row in &rows {
            counts.record(row.label);
        }
        Self { rows, counts }
    }

    pub fn rows(&self) -> &[Prediction] {
        &self.rows
    }

    pub fn counts(&self) -> LabelCounts {
        self.counts
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Prediction> {
        self.rows
    }

    /// Write the `User ID,Tweet,Sentiment` table. Fields containing commas,
    /// quotes or line breaks are quoted.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        if self.rows.is_empty() {
            csv_writer.write_record(CSV_HEADERS)?;
        }
        for row in &self.rows {
            csv_writer.serialize(CsvRow {
                identifier: row.identifier.as_str().into(),
                raw_text: row.raw_text.as_str().into(),
                label: row.label,
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(buffer)
    }

    /// Read back a table produced by [`ResultSet::write_csv`].
    pub fn read_csv<R: Read>(reader: R) -> Result<Self, ExportError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();
        for row in csv_reader.deserialize::<CsvRow<'static>>() {
            let row = row?;
            rows.push(Prediction {
                identifier: row.identifier.into_owned(),
                raw_text: row.raw_text.into_owned(),
                label: row.label,
            });
        }
        Ok(Self::from_predictions(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultSet {
        ResultSet::assemble(
            vec![
                Record::new("1", "great phone"),
                Record::new("2", "terrible battery"),
                Record::new("3", "fine, I guess"),
            ],
            vec![Label::Positive, Label::Negative, Label::Negative],
        )
        .unwrap()
    }

    #[test]
    fn test_assemble_zips_in_order() {
        let result = sample();
        let ids: Vec<&str> = result.rows().iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(result.rows()[0].label, Label::Positive);
        assert_eq!(result.rows()[2].raw_text, "fine, I guess");
    }

    #[test]
    fn test_assemble_rejects_length_mismatch() {
        let err = ResultSet::assemble(vec![Record::new("1", "a")], vec![]).unwrap_err();
        assert_eq!(
            err,
            InferenceError::LengthMismatch {
                expected: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn test_counts() {
        let counts = sample().counts();
        assert_eq!(counts.positive, 1);
        assert_eq!(counts.negative, 2);
        assert_eq!(counts.total(), 3);
        assert_eq!(
            counts.iter().collect::<Vec<_>>(),
            vec![(Label::Positive, 1), (Label::Negative, 2)]
        );
    }

    #[test]
    fn test_counts_include_zero_labels() {
        let result = ResultSet::from_predictions(vec![
            Record::new("1", "x").into_prediction(Label::Negative),
        ]);
        assert_eq!(
            result.counts().iter().collect::<Vec<_>>(),
            vec![(Label::Positive, 0), (Label::Negative, 1)]
        );
    }

    #[test]
    fn test_counts_serialize_with_label_names() {
        let json = serde_json::to_value(sample().counts()).unwrap();
        assert_eq!(json, serde_json::json!({"Positive": 1, "Negative": 2}));
    }

    #[test]
    fn test_csv_layout() {
        let csv = String::from_utf8(sample().to_csv_bytes().unwrap()).unwrap();
        assert_eq!(
            csv,
            "User ID,Tweet,Sentiment\n\
             1,great phone,Positive\n\
             2,terrible battery,Negative\n\
             3,\"fine, I guess\",Negative\n"
        );
    }

    #[test]
    fn test_csv_quotes_embedded_quotes_and_newlines() {
        let result = ResultSet::from_predictions(vec![
            Record::new("q", "she said \"wow\"").into_prediction(Label::Positive),
        ]);
        let csv = String::from_utf8(result.to_csv_bytes().unwrap()).unwrap();
        assert!(csv.contains("\"she said \"\"wow\"\"\""));
    }

    #[test]
    fn test_csv_empty_result_has_header_only() {
        let csv = String::from_utf8(ResultSet::default().to_csv_bytes().unwrap()).unwrap();
        assert_eq!(csv, "User ID,Tweet,Sentiment\n");
    }

    #[test]
    fn test_csv_round_trip() {
        let original = sample();
        let bytes = original.to_csv_bytes().unwrap();
        let parsed = ResultSet::read_csv(bytes.as_slice()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_read_csv_rejects_unknown_label() {
        let input = "User ID,Tweet,Sentiment\n1,hello,Neutral\n";
        assert!(ResultSet::read_csv(input.as_bytes()).is_err());
    }
}
