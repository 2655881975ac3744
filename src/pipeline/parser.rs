use crate::domain::Record;

/// Split a pasted block of `id, text` lines into records.
///
/// Blank lines are dropped, every other line yields exactly one record.
/// Only the first comma separates the identifier, so commas inside the
/// text survive. A line without a comma keeps its whole text under the
/// `Unknown` identifier.
pub fn parse_records(input: &str) -> Vec<Record> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Record {
    match line.split_once(',') {
        Some((identifier, text)) => Record::new(identifier.trim(), text.trim()),
        None => Record::unidentified(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNKNOWN_IDENTIFIER;

    #[test]
    fn test_parse_id_and_text() {
        let records = parse_records("123, I love this phone!");
        assert_eq!(records, vec![Record::new("123", "I love this phone!")]);
    }

    #[test]
    fn test_parse_line_without_comma() {
        let records = parse_records("I hate this");
        assert_eq!(records, vec![Record::new(UNKNOWN_IDENTIFIER, "I hate this")]);
    }

    #[test]
    fn test_parse_splits_on_first_comma_only() {
        let records = parse_records("9, well, that was fine, I guess");
        assert_eq!(records[0].identifier, "9");
        assert_eq!(records[0].raw_text, "well, that was fine, I guess");
    }

    #[test]
    fn test_parse_drops_blank_lines_and_trims() {
        let input = "\n   \n  1 ,  first  \r\n\n\t2,second\n   ";
        let records = parse_records(input);
        assert_eq!(
            records,
            vec![Record::new("1", "first"), Record::new("2", "second")]
        );
    }

    #[test]
    fn test_parse_empty_parts_are_kept() {
        let records = parse_records(",\n, text only\nid,");
        assert_eq!(
            records,
            vec![
                Record::new("", ""),
                Record::new("", "text only"),
                Record::new("id", ""),
            ]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_records("").is_empty());
        assert!(parse_records(" \n\t\n ").is_empty());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn one_record_per_non_empty_line(
                lines in proptest::collection::vec("[ a-z0-9,!?]{0,24}", 0..30)
            ) {
                let input = lines.join("\n");
                let expected = lines.iter().filter(|l| !l.trim().is_empty()).count();
                prop_assert_eq!(parse_records(&input).len(), expected);
            }

            #[test]
            fn records_follow_input_order(ids in proptest::collection::vec(0u32..10_000, 1..40)) {
                let input = ids
                    .iter()
                    .map(|id| format!("{id}, text for {id}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                let parsed: Vec<String> = parse_records(&input)
                    .into_iter()
                    .map(|r| r.identifier)
                    .collect();
                let expected: Vec<String> = ids.iter().map(u32::to_string).collect();
                prop_assert_eq!(parsed, expected);
            }
        }
    }
}
