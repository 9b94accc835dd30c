use logos::{Lexer, Logos};
use std::{fmt, str::FromStr, time::Duration};

/// How often a tracer writes its per-face report lines.
///
/// # Default [`Period`]
///
/// ```
/// # use ndn_l3_trace::Period;
/// assert_eq!(
///     Period::default().to_string(),
///     "500ms"
/// )
/// ```
///
/// # Parsing
///
/// A [`Period`] can be parsed from a human readable string. Every
/// component is a number followed by a measure (`ns`, `us`, `ms`, `s`
/// or `m`) and components are summed:
///
/// ```
/// # use ndn_l3_trace::Period;
/// # use std::time::Duration;
/// let period: Period = "1s 500ms".parse().unwrap();
/// assert_eq!(period.into_duration(), Duration::from_millis(1_500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(Duration);

impl Period {
    /// the reporting cadence used when none is given: half a simulated second
    pub const DEFAULT: Self = Self::new(Duration::from_millis(500));

    #[inline]
    pub const fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// get the inner duration
    #[inline]
    pub const fn into_duration(self) -> Duration {
        self.0
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Duration> for Period {
    fn from(value: Duration) -> Self {
        Self::new(value)
    }
}
impl From<Period> for Duration {
    fn from(value: Period) -> Self {
        value.into_duration()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Duration as fmt::Debug>::fmt(&self.0, f)
    }
}

/// Error returned when parsing a [`Period`] from a string fails.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PeriodParseError {
    #[error("Failed to lex a duration component in `{input}'")]
    Unexpected { input: String },
    #[error("Expecting duration to start with a number. Cannot parse `{input}'")]
    ExpectedNumber { input: String },
    #[error("Expecting a measure after the number in `{input}'")]
    ExpectedMeasure { input: String },
    #[error("Invalid number in duration: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

impl FromStr for Period {
    type Err = PeriodParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Lexer::new(s);

        let mut durations = Vec::new();

        while let Some(next) = lex.next() {
            let number: Token = next.map_err(|()| PeriodParseError::Unexpected {
                input: s.to_owned(),
            })?;

            if number != Token::Value {
                return Err(PeriodParseError::ExpectedNumber {
                    input: s.to_owned(),
                });
            }
            let number: u64 = lex.slice().parse()?;

            let Some(Ok(measure)) = lex.next() else {
                return Err(PeriodParseError::ExpectedMeasure {
                    input: s.to_owned(),
                });
            };
            let duration = match measure {
                Token::NanoSeconds => Duration::from_nanos(number),
                Token::MicroSeconds => Duration::from_micros(number),
                Token::MilliSeconds => Duration::from_millis(number),
                Token::Seconds => Duration::from_secs(number),
                Token::Minutes => Duration::from_secs(number * 60),
                Token::Value => {
                    return Err(PeriodParseError::ExpectedMeasure {
                        input: s.to_owned(),
                    });
                }
            };
            durations.push(duration);
        }

        if durations.is_empty() {
            return Err(PeriodParseError::ExpectedNumber {
                input: s.to_owned(),
            });
        }

        Ok(Self(durations.into_iter().sum()))
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum Token {
    #[token("ns")]
    NanoSeconds,
    #[regex("us|µs|μs")]
    MicroSeconds,
    #[token("ms")]
    MilliSeconds,
    #[token("s")]
    Seconds,
    #[token("m")]
    Minutes,

    #[regex("[0-9]+")]
    Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_half_a_second() {
        assert_eq!(
            Period::default().into_duration(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn parse() {
        let period: Period = "123ms".parse().unwrap();
        assert_eq!(period.into_duration().as_millis(), 123);

        let period: Period = "1s 2000ms 3000000us".parse().unwrap();
        assert_eq!(period.into_duration().as_secs(), 6);
    }

    #[test]
    fn parse_minutes() {
        let period: Period = "2m".parse().unwrap();
        assert_eq!(period.into_duration().as_secs(), 120);
    }

    #[test]
    fn parse_invalid() {
        assert!("".parse::<Period>().is_err());
        assert!("500".parse::<Period>().is_err());
        assert!("ms500".parse::<Period>().is_err());
        assert!("half a second".parse::<Period>().is_err());
    }

    #[test]
    fn display_round_trip() {
        // Debug on `Duration` prints `500ms', `2s', ... which the lexer
        // accepts back as long as the value has a single unit
        for period in [
            Period::new(Duration::from_millis(500)),
            Period::new(Duration::from_secs(2)),
            Period::new(Duration::from_micros(250)),
        ] {
            let parsed: Period = period.to_string().parse().unwrap();
            assert_eq!(period, parsed);
        }
    }
}
