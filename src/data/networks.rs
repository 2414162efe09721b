//! Issuing network lookup by IIN prefix.
//!
//! The rule table is static and ordered. When several rules match a number the
//! one with the longest matched prefix wins, so `6011` (Discover Card) beats
//! `60` (RuPay) and `650002-650027` (Verve) beats `65` (Troy | Discover Card).
//! Rules that match prefixes of equal length are resolved by table order; the
//! only such overlap between different networks is `55`, which resolves to
//! Diners Club United States & Canada ahead of the `51-55` Mastercard range.

use crate::domain::{DigitString, NetworkName};

/// Network reported for numbers starting with `4` that no rule claims
pub const VISA_FALLBACK: NetworkName = NetworkName::new("Visa");

/// Leading-digit pattern identifying an issuer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    /// Literal prefix, e.g. "6011"
    Exact(&'static str),
    /// Inclusive numeric range over the first `width` digits, where `width`
    /// is the digit count of `low`
    Range { low: u64, high: u64 },
}

impl PrefixRule {
    /// Length of the prefix this rule matches at the start of `digits`
    pub fn matched_len(&self, digits: &DigitString) -> Option<usize> {
        match *self {
            Self::Exact(prefix) => digits.starts_with(prefix).then_some(prefix.len()),
            Self::Range { low, high } => {
                let width = digit_width(low);
                let value: u64 = digits.as_str().get(..width)?.parse().ok()?;
                (low..=high).contains(&value).then_some(width)
            }
        }
    }
}

/// Number of decimal digits in `value`
const fn digit_width(value: u64) -> usize {
    match value.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

/// One row of the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IinRule {
    pub prefix: PrefixRule,
    pub network: NetworkName,
}

const fn exact(prefix: &'static str, network: &'static str) -> IinRule {
    IinRule {
        prefix: PrefixRule::Exact(prefix),
        network: NetworkName::new(network),
    }
}

const fn range(low: u64, high: u64, network: &'static str) -> IinRule {
    IinRule {
        prefix: PrefixRule::Range { low, high },
        network: NetworkName::new(network),
    }
}

/// Known issuing networks
pub static ISSUING_NETWORKS: &[IinRule] = &[
    exact("34", "American Express"),
    exact("37", "American Express"),
    exact("5610", "Bankcard"),
    range(560221, 560225, "Bankcard"),
    exact("31", "China T-Union"),
    exact("62", "China UnionPay"),
    exact("36", "Diners Club International"),
    exact("55", "Diners Club United States & Canada"),
    exact("6011", "Discover Card"),
    range(644, 649, "Discover Card"),
    exact("647", "Discover Card"),
    range(622126, 622925, "Discover Card"),
    range(60400100, 60420099, "UkrCard"),
    exact("60", "RuPay"),
    exact("81", "RuPay"),
    exact("82", "RuPay"),
    exact("508", "RuPay"),
    exact("353", "RuPay"),
    exact("356", "RuPay"),
    exact("636", "InterPayment"),
    range(637, 639, "InstaPayment"),
    range(3528, 3589, "JCB"),
    exact("676770", "Maestro UK"),
    exact("676774", "Maestro UK"),
    exact("5018", "Maestro"),
    exact("5020", "Maestro"),
    exact("5038", "Maestro"),
    exact("5893", "Maestro"),
    exact("6304", "Maestro"),
    exact("6761", "Maestro"),
    exact("6762", "Maestro"),
    exact("6763", "Maestro"),
    exact("5019", "Dankort"),
    exact("4571", "Dankort"),
    range(2200, 2204, "Mir"),
    exact("2205", "BORICA"),
    range(2221, 2720, "Mastercard"),
    range(51, 55, "Mastercard"),
    exact("4903", "Switch"),
    exact("4905", "Switch"),
    exact("4911", "Switch"),
    exact("4936", "Switch"),
    exact("564182", "Switch"),
    exact("633110", "Switch"),
    exact("6333", "Switch"),
    exact("6759", "Switch | Maestro"),
    exact("65", "Troy | Discover Card"),
    exact("9792", "Troy"),
    exact("4026", "Visa Electron"),
    exact("417500", "Visa Electron"),
    exact("4508", "Visa Electron"),
    exact("4844", "Visa Electron"),
    exact("4913", "Visa Electron"),
    exact("4917", "Visa Electron"),
    exact("1", "UATP"),
    range(506099, 506198, "Verve"),
    range(650002, 650027, "Verve"),
    range(507865, 507964, "Verve"),
    exact("357111", "LankaPay"),
    exact("9704", "Napas"),
];

/// Classifies card numbers against a rule table
#[derive(Debug, Clone, Copy)]
pub struct NetworkClassifier {
    rules: &'static [IinRule],
}

impl NetworkClassifier {
    /// Creates a classifier over the built-in table
    pub fn new() -> Self {
        Self::with_rules(ISSUING_NETWORKS)
    }

    pub fn with_rules(rules: &'static [IinRule]) -> Self {
        Self { rules }
    }

    /// Returns the most specific matching network, `Visa` for otherwise
    /// unmatched numbers starting with `4`, or `None`.
    pub fn classify(&self, digits: &DigitString) -> Option<NetworkName> {
        self.rules
            .iter()
            .filter_map(|rule| rule.prefix.matched_len(digits).map(|len| (len, rule.network)))
            .fold(None, |best, (len, network)| match best {
                // Earlier rules keep ties
                Some((best_len, _)) if best_len >= len => best,
                _ => Some((len, network)),
            })
            .map(|(_, network)| network)
            .or_else(|| digits.starts_with("4").then_some(VISA_FALLBACK))
    }
}

impl Default for NetworkClassifier {
    fn default() -> Self {
        Self::new()
    }
}
