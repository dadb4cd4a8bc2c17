use dioxus::prelude::*;

/// Number of words of a freshly generated recovery phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordCount {
    #[default]
    Twelve,
    TwentyFour,
}
impl WordCount {
    pub fn count(self) -> usize {
        match self {
            Self::Twelve => 12,
            Self::TwentyFour => 24,
        }
    }
}
impl core::fmt::Display for WordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}
impl core::str::FromStr for WordCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "12" => Ok(Self::Twelve),
            "24" => Ok(Self::TwentyFour),
            other => Err(format!("unsupported word count: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplicationConfig {
    pub mnemonic_word_count: WordCount,
}

pub static APPLICATION_CONFIG: GlobalSignal<ApplicationConfig> =
    Signal::global(|| ApplicationConfig::default());
