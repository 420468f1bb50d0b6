use gapmend_core::MarketKind;

/// Decides whether a symbol trades around the clock or in sessions.
///
/// Implementations must be cheap and deterministic; the repairer calls
/// `classify` once per `repair_symbol` request.
pub trait MarketClassifier {
    /// Market layout for `symbol`.
    fn classify(&self, symbol: &str) -> MarketKind;
}

/// Classifies by symbol suffix: a match is `Continuous`, anything else is
/// `Session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixClassifier {
    suffixes: Vec<String>,
}

impl SuffixClassifier {
    /// Classifier for the given suffixes. Matching is case-sensitive.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Configured suffixes.
    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for SuffixClassifier {
    /// Crypto pairs quoted as `XXX-USD` are continuous.
    fn default() -> Self {
        Self::new(["-USD"])
    }
}

impl MarketClassifier for SuffixClassifier {
    fn classify(&self, symbol: &str) -> MarketKind {
        if self.suffixes.iter().any(|s| symbol.ends_with(s.as_str())) {
            MarketKind::Continuous
        } else {
            MarketKind::Session
        }
    }
}

impl<F> MarketClassifier for F
where
    F: Fn(&str) -> MarketKind,
{
    fn classify(&self, symbol: &str) -> MarketKind {
        self(symbol)
    }
}
