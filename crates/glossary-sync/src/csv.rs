/// One export row, not yet bound to a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub term: String,
    pub translation: String,
    pub part_of_speech: String,
    pub comment: String,
}

/// Parses a glossary export into records.
///
/// The payload is comma separated with a leading header line, which is
/// always discarded. Fields may be quoted; a quoted field can contain
/// commas, newlines and doubled quotes. Rows with fewer than four fields
/// are discarded. Rows with more than four keep the first two and the
/// last two fields. Rows with a blank term are discarded.
pub fn parse(raw: &str) -> Vec<Record> {
    let mut rows = split_records(raw);
    if rows.is_empty() {
        return Vec::new();
    }
    rows.remove(0);
    rows.into_iter().filter_map(candidate).collect()
}

fn split_records(raw: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' => {
                    fields.push(std::mem::take(&mut field));
                    push_record(&mut records, std::mem::take(&mut fields));
                }
                _ => field.push(ch),
            }
        }
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_record(&mut records, fields);
    }

    records
}

fn push_record(records: &mut Vec<Vec<String>>, fields: Vec<String>) {
    // A record with a single blank field is an empty line, not data.
    if fields.len() == 1 && fields[0].trim().is_empty() {
        return;
    }
    records.push(fields);
}

fn candidate(mut fields: Vec<String>) -> Option<Record> {
    if fields.len() < 4 {
        return None;
    }
    if fields.len() > 4 {
        let tail = fields.len() - 2;
        fields.drain(2..tail);
    }

    let mut parts = fields.into_iter();
    let term = parts.next()?;
    let translation = parts.next()?;
    let part_of_speech = parts.next()?;
    let comment = parts.next()?;
    if term.trim().is_empty() {
        return None;
    }

    Some(Record {
        term,
        translation,
        part_of_speech,
        comment,
    })
}
