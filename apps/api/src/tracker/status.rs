use std::fmt;
use std::str::FromStr;

/// Where an application stands in the hiring pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interview,
    Rejected,
    Offer,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Offer => "offer",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "applied" => Ok(ApplicationStatus::Applied),
            "interview" => Ok(ApplicationStatus::Interview),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "offer" => Ok(ApplicationStatus::Offer),
            other => Err(format!(
                "Unknown status '{other}'. Expected one of: applied, interview, rejected, offer"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            ApplicationStatus::Applied,
            ApplicationStatus::Interview,
            ApplicationStatus::Rejected,
            ApplicationStatus::Offer,
        ] {
            assert_eq!(status.as_str().parse::<ApplicationStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_is_lenient_on_case() {
        assert_eq!(
            " Interview ".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Interview
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "ghosted".parse::<ApplicationStatus>().unwrap_err();
        assert!(err.contains("ghosted"));
    }

    #[test]
    fn test_default_status_is_applied() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Applied);
        assert_eq!(ApplicationStatus::Offer.to_string(), "offer");
    }
}
