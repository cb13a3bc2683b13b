//! Fixed template text baked into the certificate designs.

pub const DEFAULT_CERTIFYING_AUTHORITY: &str = "Newton School of Technology";

pub const DEFAULT_POSITION: &str = "1st";

pub const DEFAULT_VENUE: &str = "Newton School of Technology, ADYPU, Pune";

pub const DEFAULT_APPRECIATION_TEXT: &str =
    "We appreciate your dedication and commend your outstanding performance.";

pub const DEFAULT_PARTICIPATION_TEXT: &str =
    "has successfully completed the event and is awarded this certificate of participation.";

pub const FALLBACK_AUTHORITY: &str = "Certificate Authority";
