use crate::domain::models::roster::{ParticipantCandidate, Roster, RosterRow};
use crate::error::AppError;
use csv::{ReaderBuilder, Trim};

const REQUIRED_HEADERS: [&str; 2] = ["email", "fullname"];

/// Parses raw CSV text into an ordered roster of candidate rows.
///
/// Quoting is disabled on purpose: the upload format is plain comma-split
/// lines with no embedded-comma or quote escaping, and rows whose field
/// count disagrees with the header abort the parse with a row-indexed
/// error. `default_event_id` fills rows that carry no `eventid` column.
pub fn parse_roster(text: &str, default_event_id: Option<&str>) -> Result<Roster, AppError> {
    if text.split('\n').count() < 2 {
        return Err(AppError::Validation(
            "CSV file must contain a header row and at least one data row".into(),
        ));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let header_record = match records.next() {
        Some(Ok(record)) => record,
        _ => {
            return Err(AppError::Validation(
                "CSV file must contain a header row and at least one data row".into(),
            ))
        }
    };

    let headers: Vec<String> = header_record.iter().map(|h| h.to_lowercase()).collect();

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required headers: {}",
            missing.join(", ")
        )));
    }

    let mut rows = Vec::new();

    for result in records {
        let record = result.map_err(|e| AppError::Validation(format!("Failed to parse CSV: {e}")))?;

        // The csv reader skips fully blank lines, so the row number is
        // derived from the record's file line (header on line 1), keeping
        // reported numbers stable when blank lines are present.
        if record.len() != headers.len() {
            let row = record
                .position()
                .map(|p| p.line().saturating_sub(1))
                .unwrap_or(0);
            return Err(AppError::Validation(format!(
                "Row {row} has an incorrect number of columns"
            )));
        }

        let field = |name: &str| -> Option<&str> {
            headers
                .iter()
                .position(|h| h == name)
                .map(|i| record.get(i).unwrap_or(""))
                .filter(|v| !v.is_empty())
        };

        let mut errors = Vec::new();

        match field("email") {
            None => errors.push("Email is required".to_string()),
            Some(email) if !email.contains('@') => {
                errors.push("Invalid email format".to_string())
            }
            Some(_) => {}
        }

        if field("fullname").is_none() {
            errors.push("Full name is required".to_string());
        }

        let candidate = ParticipantCandidate {
            full_name: field("fullname").unwrap_or("").to_string(),
            email: field("email").unwrap_or("").to_string(),
            organization: field("organization").map(str::to_string),
            event_id: field("eventid")
                .map(str::to_string)
                .or_else(|| default_event_id.map(str::to_string)),
        };

        rows.push(if errors.is_empty() {
            RosterRow::Valid(candidate)
        } else {
            RosterRow::Invalid { fields: candidate, errors }
        });
    }

    Ok(Roster { rows })
}

/// Collapses duplicate emails within one batch, keeping the last occurrence,
/// so a single multi-row upsert statement stays valid on every backend.
/// Emails are normalized to lowercase here; original order is preserved
/// otherwise.
pub fn dedupe_last_wins(candidates: Vec<ParticipantCandidate>) -> Vec<ParticipantCandidate> {
    let mut out: Vec<ParticipantCandidate> = Vec::with_capacity(candidates.len());
    for mut candidate in candidates {
        candidate.email = candidate.email.to_lowercase();
        if let Some(existing) = out.iter_mut().find(|c| c.email == candidate.email) {
            *existing = candidate;
        } else {
            out.push(candidate);
        }
    }
    out
}
