//! The pattern token alphabet.

/// A recognised pattern token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `dddd`
    WeekdayName,
    /// `ddd`
    WeekdayAbbrev,
    /// `dd`
    DayPadded,
    /// `d`
    Day,
    /// `MMMM`
    MonthName,
    /// `MMM`
    MonthAbbrev,
    /// `MM`
    MonthPadded,
    /// `M`
    Month,
    /// `yyyy`
    Year,
    /// `yy`
    YearShort,
    /// `HH`
    Hour24Padded,
    /// `hh`
    Hour12Padded,
    /// `h`
    Hour12,
    /// `mm`
    MinutePadded,
    /// `m`
    Minute,
    /// `ss`
    SecondPadded,
    /// `s`
    Second,
    /// `f`
    Millis,
    /// `ff`
    Micros,
    /// `TT`
    MeridianUpper,
    /// `tt`
    MeridianLower,
    /// `Z`
    ZoneAbbrev,
    /// `zz`
    OffsetHours,
    /// `zzz`
    OffsetHoursMinutes,
}

/// Token spellings, longest first within each letter family. The scan
/// takes the first entry that prefixes the remaining input.
const TABLE: &[(&str, Token)] = &[
    ("dddd", Token::WeekdayName),
    ("ddd", Token::WeekdayAbbrev),
    ("dd", Token::DayPadded),
    ("d", Token::Day),
    ("MMMM", Token::MonthName),
    ("MMM", Token::MonthAbbrev),
    ("MM", Token::MonthPadded),
    ("M", Token::Month),
    ("yyyy", Token::Year),
    ("yy", Token::YearShort),
    ("HH", Token::Hour24Padded),
    ("hh", Token::Hour12Padded),
    ("h", Token::Hour12),
    ("mm", Token::MinutePadded),
    ("m", Token::Minute),
    ("ss", Token::SecondPadded),
    ("s", Token::Second),
    ("ff", Token::Micros),
    ("f", Token::Millis),
    ("TT", Token::MeridianUpper),
    ("tt", Token::MeridianLower),
    ("Z", Token::ZoneAbbrev),
    ("zzz", Token::OffsetHoursMinutes),
    ("zz", Token::OffsetHours),
];

impl Token {
    /// Match the longest token at the start of `input`.
    pub fn match_prefix(input: &str) -> Option<(Token, usize)> {
        TABLE
            .iter()
            .find(|(text, _)| input.starts_with(text))
            .map(|&(text, token)| (token, text.len()))
    }

    /// The token's spelling in a pattern.
    pub fn as_str(&self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, token)| token == self)
            .map_or("", |&(text, _)| text)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_match_wins() {
        assert_eq!(Token::match_prefix("dddd-"), Some((Token::WeekdayName, 4)));
        assert_eq!(Token::match_prefix("ddd"), Some((Token::WeekdayAbbrev, 3)));
        assert_eq!(Token::match_prefix("zzzz"), Some((Token::OffsetHoursMinutes, 3)));
        assert_eq!(Token::match_prefix("fff"), Some((Token::Micros, 2)));
        assert_eq!(Token::match_prefix("yyy"), Some((Token::YearShort, 2)));
    }

    #[test]
    fn non_tokens() {
        assert_eq!(Token::match_prefix("z"), None);
        assert_eq!(Token::match_prefix("T"), None);
        assert_eq!(Token::match_prefix("D"), None);
        assert_eq!(Token::match_prefix(""), None);
    }

    #[test]
    fn spelling_roundtrip() {
        for &(text, token) in TABLE {
            assert_eq!(token.as_str(), text);
            assert_eq!(Token::match_prefix(text), Some((token, text.len())));
        }
    }
}
