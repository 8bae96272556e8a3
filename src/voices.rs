//! Prebuilt voice catalog for the Gemini speech API.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Voices accepted by the speech API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Voice {
    Zephyr,
    Puck,
    Charon,
    Kore,
    Fenrir,
    Leda,
    Orus,
    Aoede,
    Callirrhoe,
    Autonoe,
    Enceladus,
    Iapetus,
    Umbriel,
    Algieba,
    Despina,
    Erinome,
    Algenib,
    Rasalgethi,
    Laomedeia,
    Achernar,
    Alnilam,
    Schedar,
    Gacrux,
    Pulcherrima,
    Achird,
    Zubenelgenubi,
    Vindemiatrix,
    Sadachbia,
    Sadaltager,
    Sulafat,
    /// Custom/unknown voice by API name.
    #[strum(default)]
    Custom(String),
}

impl Voice {
    /// Get the API voice name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Zephyr => "Zephyr",
            Self::Puck => "Puck",
            Self::Charon => "Charon",
            Self::Kore => "Kore",
            Self::Fenrir => "Fenrir",
            Self::Leda => "Leda",
            Self::Orus => "Orus",
            Self::Aoede => "Aoede",
            Self::Callirrhoe => "Callirrhoe",
            Self::Autonoe => "Autonoe",
            Self::Enceladus => "Enceladus",
            Self::Iapetus => "Iapetus",
            Self::Umbriel => "Umbriel",
            Self::Algieba => "Algieba",
            Self::Despina => "Despina",
            Self::Erinome => "Erinome",
            Self::Algenib => "Algenib",
            Self::Rasalgethi => "Rasalgethi",
            Self::Laomedeia => "Laomedeia",
            Self::Achernar => "Achernar",
            Self::Alnilam => "Alnilam",
            Self::Schedar => "Schedar",
            Self::Gacrux => "Gacrux",
            Self::Pulcherrima => "Pulcherrima",
            Self::Achird => "Achird",
            Self::Zubenelgenubi => "Zubenelgenubi",
            Self::Vindemiatrix => "Vindemiatrix",
            Self::Sadachbia => "Sadachbia",
            Self::Sadaltager => "Sadaltager",
            Self::Sulafat => "Sulafat",
            Self::Custom(name) => name,
        }
    }

    /// The prebuilt voices, in catalog order.
    pub fn prebuilt() -> &'static [Voice] {
        PREBUILT_VOICES
    }
}

/// Every prebuilt voice, in catalog order.
pub const PREBUILT_VOICES: &[Voice] = &[
    Voice::Zephyr,
    Voice::Puck,
    Voice::Charon,
    Voice::Kore,
    Voice::Fenrir,
    Voice::Leda,
    Voice::Orus,
    Voice::Aoede,
    Voice::Callirrhoe,
    Voice::Autonoe,
    Voice::Enceladus,
    Voice::Iapetus,
    Voice::Umbriel,
    Voice::Algieba,
    Voice::Despina,
    Voice::Erinome,
    Voice::Algenib,
    Voice::Rasalgethi,
    Voice::Laomedeia,
    Voice::Achernar,
    Voice::Alnilam,
    Voice::Schedar,
    Voice::Gacrux,
    Voice::Pulcherrima,
    Voice::Achird,
    Voice::Zubenelgenubi,
    Voice::Vindemiatrix,
    Voice::Sadachbia,
    Voice::Sadaltager,
    Voice::Sulafat,
];
