//! Cover-letter tone: a closed set of styles, each mapped to one fixed instruction.

/// Requested writing style for a cover letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToneSetting {
    #[default]
    Professional,
    Enthusiastic,
    Conversational,
    Formal,
}

impl ToneSetting {
    pub const ALL: [ToneSetting; 4] = [
        ToneSetting::Professional,
        ToneSetting::Enthusiastic,
        ToneSetting::Conversational,
        ToneSetting::Formal,
    ];

    /// Lenient conversion from client input. Absent, blank or unknown values
    /// fall back to `Professional`; matching ignores case and whitespace.
    pub fn from_input(raw: Option<&str>) -> Self {
        let Some(key) = raw.map(|s| s.trim().to_ascii_lowercase()) else {
            return ToneSetting::default();
        };
        ToneSetting::ALL
            .into_iter()
            .find(|tone| tone.as_str() == key)
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToneSetting::Professional => "professional",
            ToneSetting::Enthusiastic => "enthusiastic",
            ToneSetting::Conversational => "conversational",
            ToneSetting::Formal => "formal",
        }
    }

    /// The sentence injected into the cover-letter prompt for this tone.
    pub fn instruction(self) -> &'static str {
        match self {
            ToneSetting::Professional => {
                "Use a professional, formal tone that demonstrates competence and reliability."
            }
            ToneSetting::Enthusiastic => {
                "Use an enthusiastic, energetic tone that shows passion and excitement for the role."
            }
            ToneSetting::Conversational => {
                "Use a conversational, approachable tone that feels personable while remaining professional."
            }
            ToneSetting::Formal => {
                "Use a formal, traditional business tone that emphasizes respect and hierarchy."
            }
        }
    }
}
