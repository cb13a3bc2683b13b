use serde::Serialize;

/// A parsed CSV row that passed validation and is ready to upsert.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ParticipantCandidate {
    pub full_name: String,
    pub email: String,
    pub organization: Option<String>,
    pub event_id: Option<String>,
}

/// One roster line in original file order. Invalid rows keep the raw field
/// values so callers can show what was rejected and why.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RosterRow {
    Valid(ParticipantCandidate),
    Invalid {
        #[serde(flatten)]
        fields: ParticipantCandidate,
        errors: Vec<String>,
    },
}

impl RosterRow {
    pub fn fields(&self) -> &ParticipantCandidate {
        match self {
            RosterRow::Valid(c) => c,
            RosterRow::Invalid { fields, .. } => fields,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            RosterRow::Valid(_) => &[],
            RosterRow::Invalid { errors, .. } => errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, RosterRow::Valid(_))
    }
}

/// The full parse result: every row, valid and invalid, in file order.
#[derive(Debug, Serialize, Clone)]
pub struct Roster {
    pub rows: Vec<RosterRow>,
}

impl Roster {
    pub fn invalid_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_valid()).count()
    }

    /// Upload precondition: succeeds only when every row is valid.
    /// Err carries the number of invalid rows.
    pub fn into_candidates(self) -> Result<Vec<ParticipantCandidate>, usize> {
        let invalid = self.invalid_count();
        if invalid > 0 {
            return Err(invalid);
        }
        Ok(self
            .rows
            .into_iter()
            .map(|row| match row {
                RosterRow::Valid(c) => c,
                RosterRow::Invalid { .. } => unreachable!(),
            })
            .collect())
    }
}
