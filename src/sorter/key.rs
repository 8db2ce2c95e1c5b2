use clap::ValueEnum;
use std::cmp::Ordering;
use std::fmt;

pub const CROSS_MARK: &str = "✖";
pub const CHECK_MARK: &str = "✅";
pub const UNKNOWN_MARK: &str = "?";

/// Pass/fail markers recognised by [`Symbolic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Cross,
    Unknown,
    Check,
}

impl Mark {
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            CROSS_MARK => Some(Mark::Cross),
            UNKNOWN_MARK => Some(Mark::Unknown),
            CHECK_MARK => Some(Mark::Check),
            _ => None,
        }
    }

    pub fn rank(self) -> i32 {
        match self {
            Mark::Cross => -1,
            Mark::Unknown => 0,
            Mark::Check => 1,
        }
    }
}

/// Orderable value extracted from a cell.
///
/// Keys produced by one strategy always compare meaningfully with each other.
/// Across variants the order is fixed so `Ord` stays total:
/// text, then grade ranks, then the symbolic tiers. Marks with a rank of
/// zero or below go before every number and positive marks after them, so
/// `✖ < ? < numbers < ✅ < unparseable`.
#[derive(Clone, Debug)]
pub enum SortKey {
    Text(String),
    Rank(i32),
    Mark(Mark),
    Number(f64),
}

impl SortKey {
    fn tier(&self) -> u8 {
        match self {
            SortKey::Text(_) => 0,
            SortKey::Rank(_) => 1,
            SortKey::Mark(mark) if mark.rank() <= 0 => 2,
            SortKey::Number(n) if n.is_nan() => 5,
            SortKey::Number(_) => 3,
            SortKey::Mark(_) => 4,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Rank(a), SortKey::Rank(b)) => a.cmp(b),
            (SortKey::Mark(a), SortKey::Mark(b)) => self
                .tier()
                .cmp(&other.tier())
                .then_with(|| a.rank().cmp(&b.rank())),
            // NaN never reaches partial_cmp here: it has its own tier, and
            // two NaNs fall through to the tier comparison as equal.
            (SortKey::Number(a), SortKey::Number(b)) if !a.is_nan() && !b.is_nan() => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => self.tier().cmp(&other.tier()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Turns the displayed text of a cell into a sort key.
pub trait KeyExtractor {
    fn extract_key(&self, text: &str) -> SortKey;

    fn name(&self) -> &'static str;
}

/// Raw text in code-point order. Whitespace is significant.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lexical;

impl KeyExtractor for Lexical {
    fn extract_key(&self, text: &str) -> SortKey {
        SortKey::Text(text.to_string())
    }

    fn name(&self) -> &'static str {
        "lexical"
    }
}

/// Letter grades as reported by SSL scanners, `A++` best and `F` worst.
/// Anything else ranks below `F`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GradeScale;

impl GradeScale {
    pub fn rank(grade: &str) -> i32 {
        match grade {
            "A++" => 10,
            "A+" => 9,
            "A" => 8,
            "A-" => 7,
            "A--" => 6,
            "B" => 5,
            "C" => 4,
            "D" => 3,
            "E" => 2,
            "F" => 1,
            _ => 0,
        }
    }
}

impl KeyExtractor for GradeScale {
    fn extract_key(&self, text: &str) -> SortKey {
        SortKey::Rank(Self::rank(text.trim()))
    }

    fn name(&self) -> &'static str {
        "grade"
    }
}

/// `✖`, `?` and `✅` markers mixed with numeric text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Symbolic;

impl KeyExtractor for Symbolic {
    fn extract_key(&self, text: &str) -> SortKey {
        let text = text.trim();
        match Mark::from_text(text) {
            Some(mark) => SortKey::Mark(mark),
            None => SortKey::Number(text.parse::<f64>().unwrap_or(f64::NAN)),
        }
    }

    fn name(&self) -> &'static str {
        "symbolic"
    }
}

/// Selects one of the built-in extractors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    #[default]
    Lexical,
    Grade,
    Symbolic,
}

impl Strategy {
    pub fn extractor(self) -> Box<dyn KeyExtractor> {
        match self {
            Strategy::Lexical => Box::new(Lexical),
            Strategy::Grade => Box::new(GradeScale),
            Strategy::Symbolic => Box::new(Symbolic),
        }
    }

    pub fn next(self) -> Self {
        match self {
            Strategy::Lexical => Strategy::Grade,
            Strategy::Grade => Strategy::Symbolic,
            Strategy::Symbolic => Strategy::Lexical,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extractor().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("A++", 10 ; "a double plus")]
    #[test_case("A+", 9 ; "a plus")]
    #[test_case("A", 8 ; "a")]
    #[test_case("A-", 7 ; "a minus")]
    #[test_case("A--", 6 ; "a double minus")]
    #[test_case("B", 5 ; "b")]
    #[test_case("C", 4 ; "c")]
    #[test_case("D", 3 ; "d")]
    #[test_case("E", 2 ; "e")]
    #[test_case("F", 1 ; "f")]
    #[test_case("T", 0 ; "unknown grade")]
    #[test_case("a+", 0 ; "lowercase is not a grade")]
    #[test_case("", 0 ; "empty")]
    fn test_grade_rank(grade: &str, expected: i32) {
        assert_eq!(GradeScale::rank(grade), expected);
    }

    #[test]
    fn test_grade_trims_whitespace() {
        assert_eq!(GradeScale.extract_key("  A+\n"), SortKey::Rank(9));
    }

    #[test]
    fn test_lexical_keeps_whitespace() {
        let padded = Lexical.extract_key(" apple");
        let plain = Lexical.extract_key("apple");
        assert_ne!(padded, plain);
        assert!(padded < plain);
    }

    #[test]
    fn test_lexical_is_code_point_order() {
        assert!(Lexical.extract_key("Zebra") < Lexical.extract_key("apple"));
        assert!(Lexical.extract_key("apple") < Lexical.extract_key("äpple"));
    }

    #[test]
    fn test_symbolic_marks() {
        assert_eq!(Symbolic.extract_key("✖"), SortKey::Mark(Mark::Cross));
        assert_eq!(Symbolic.extract_key(" ? "), SortKey::Mark(Mark::Unknown));
        assert_eq!(Symbolic.extract_key("✅"), SortKey::Mark(Mark::Check));
        assert_eq!(Mark::Cross.rank(), -1);
        assert_eq!(Mark::Check.rank(), 1);
    }

    #[test]
    fn test_symbolic_numbers() {
        assert_eq!(Symbolic.extract_key(" 3.5 "), SortKey::Number(3.5));
        assert!(Symbolic.extract_key("-2") < Symbolic.extract_key("10"));
    }

    #[test]
    fn test_symbolic_tiers() {
        let cross = Symbolic.extract_key("✖");
        let unknown = Symbolic.extract_key("?");
        let low = Symbolic.extract_key("-100");
        let high = Symbolic.extract_key("1e9");
        let check = Symbolic.extract_key("✅");
        let garbage = Symbolic.extract_key("n/a");

        assert!(cross < unknown);
        assert!(unknown < low);
        assert!(low < high);
        assert!(high < check);
        assert!(check < garbage);
    }

    #[test]
    fn test_marks_order_by_rank() {
        let cross = SortKey::Mark(Mark::Cross);
        let unknown = SortKey::Mark(Mark::Unknown);
        let check = SortKey::Mark(Mark::Check);

        assert_eq!(cross.cmp(&unknown), Mark::Cross.rank().cmp(&Mark::Unknown.rank()));
        assert_eq!(unknown.cmp(&check), Ordering::Less);
        assert_eq!(check.cmp(&cross), Ordering::Greater);
        assert_eq!(unknown.cmp(&SortKey::Mark(Mark::Unknown)), Ordering::Equal);
        assert!(unknown < SortKey::Number(f64::MIN));
        assert!(check > SortKey::Number(f64::MAX));
    }

    #[test]
    fn test_unparseable_keys_are_equal() {
        let a = Symbolic.extract_key("n/a");
        let b = Symbolic.extract_key("pending");
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_strategy_cycle_and_names() {
        assert_eq!(Strategy::Lexical.next(), Strategy::Grade);
        assert_eq!(Strategy::Symbolic.next(), Strategy::Lexical);
        assert_eq!(Strategy::Grade.to_string(), "grade");
        assert_eq!(Strategy::default(), Strategy::Lexical);
    }
}
