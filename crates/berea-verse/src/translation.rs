//! Bible translation identifiers.

use serde::{Deserialize, Serialize};

/// Free translations offered by the upstream verse service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Translation {
    /// King James Version.
    #[default]
    Kjv,
    /// American Standard Version.
    Asv,
    /// World English Bible.
    Web,
    /// Bible in Basic English.
    Basic,
    /// Darby Translation.
    Darby,
}

impl Translation {
    /// All supported translations, in display order.
    pub const ALL: &'static [Translation] = &[
        Translation::Kjv,
        Translation::Asv,
        Translation::Web,
        Translation::Basic,
        Translation::Darby,
    ];

    /// The code used in upstream request URLs.
    pub fn code(&self) -> &'static str {
        match self {
            Translation::Kjv => "kjv",
            Translation::Asv => "asv",
            Translation::Web => "web",
            Translation::Basic => "basic",
            Translation::Darby => "darby",
        }
    }
}

impl std::fmt::Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Translation {
    type Err = berea_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kjv" => Ok(Translation::Kjv),
            "asv" => Ok(Translation::Asv),
            "web" => Ok(Translation::Web),
            "basic" => Ok(Translation::Basic),
            "darby" => Ok(Translation::Darby),
            other => Err(berea_core::Error::Config(format!(
                "unknown translation: {}",
                other
            ))),
        }
    }
}
