// Format token vocabulary
// One table shared by the mask engine and the chrono adapter

/// A date/time field token inside a format string.
///
/// Tokens are written as runs of a single letter (`YYYY`, `MM`, `hh`). A
/// shorter run of the same letter normalizes to the canonical width, so
/// `M/D/Y` behaves like `MM/DD/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatToken {
    Year,
    Month,
    DayOfMonth,
    WeekDay,
    Hour24,
    Hour12,
    Minute,
    Second,
    Millisecond,
    MeridiemUpper,
    MeridiemLower,
}

impl FormatToken {
    pub fn from_letter(letter: char) -> Option<FormatToken> {
        Some(match letter {
            'Y' => FormatToken::Year,
            'M' => FormatToken::Month,
            'D' => FormatToken::DayOfMonth,
            'd' => FormatToken::WeekDay,
            'H' => FormatToken::Hour24,
            'h' => FormatToken::Hour12,
            'm' => FormatToken::Minute,
            's' => FormatToken::Second,
            'S' => FormatToken::Millisecond,
            'A' => FormatToken::MeridiemUpper,
            'a' => FormatToken::MeridiemLower,
            _ => return None,
        })
    }

    /// The token's spelling at canonical width.
    pub fn canonical(self) -> &'static str {
        match self {
            FormatToken::Year => "YYYY",
            FormatToken::Month => "MM",
            FormatToken::DayOfMonth => "DD",
            FormatToken::WeekDay => "d",
            FormatToken::Hour24 => "HH",
            FormatToken::Hour12 => "hh",
            FormatToken::Minute => "mm",
            FormatToken::Second => "ss",
            FormatToken::Millisecond => "SSS",
            FormatToken::MeridiemUpper => "A",
            FormatToken::MeridiemLower => "a",
        }
    }

    /// Width of the rendered text for this token. Differs from the
    /// canonical spelling only for meridiems, whose single-letter token
    /// renders two characters ("AM").
    pub fn edit_width(self) -> usize {
        match self {
            FormatToken::Year => 4,
            FormatToken::Millisecond => 3,
            FormatToken::WeekDay => 1,
            FormatToken::MeridiemUpper | FormatToken::MeridiemLower => 2,
            _ => 2,
        }
    }

    /// Inclusive numeric range for keyboard stepping, `None` when unbounded
    /// (years). Months and days are 1-based.
    pub fn range(self) -> Option<(u32, u32)> {
        match self {
            FormatToken::Year => None,
            FormatToken::Month => Some((1, 12)),
            FormatToken::DayOfMonth => Some((1, 31)),
            FormatToken::WeekDay => Some((0, 6)),
            FormatToken::Hour24 => Some((0, 23)),
            FormatToken::Hour12 => Some((1, 12)),
            FormatToken::Minute | FormatToken::Second => Some((0, 59)),
            FormatToken::Millisecond => Some((0, 999)),
            FormatToken::MeridiemUpper | FormatToken::MeridiemLower => Some((0, 1)),
        }
    }

    pub fn strftime(self) -> &'static str {
        match self {
            FormatToken::Year => "%Y",
            FormatToken::Month => "%m",
            FormatToken::DayOfMonth => "%d",
            FormatToken::WeekDay => "%w",
            FormatToken::Hour24 => "%H",
            FormatToken::Hour12 => "%I",
            FormatToken::Minute => "%M",
            FormatToken::Second => "%S",
            FormatToken::Millisecond => "%3f",
            FormatToken::MeridiemUpper => "%p",
            FormatToken::MeridiemLower => "%P",
        }
    }
}

/// Read the token run starting at `pos`, returning the token and the number
/// of characters consumed. Returns `None` when the character at `pos` is a
/// literal.
pub fn scan_token(chars: &[char], pos: usize) -> Option<(FormatToken, usize)> {
    let letter = *chars.get(pos)?;
    let token = FormatToken::from_letter(letter)?;
    let run = chars[pos..].iter().take_while(|&&c| c == letter).count();
    Some((token, run))
}

/// Rewrite every token run at its canonical width, leaving literals intact.
pub fn normalize_format(fmt: &str) -> String {
    let chars: Vec<char> = fmt.chars().collect();
    let mut out = String::with_capacity(fmt.len() + 8);
    let mut pos = 0;
    while pos < chars.len() {
        match scan_token(&chars, pos) {
            Some((token, run)) => {
                out.push_str(token.canonical());
                pos += run;
            }
            None => {
                out.push(chars[pos]);
                pos += 1;
            }
        }
    }
    out
}

/// Translate a token format string into a chrono strftime string. Literal
/// `%` signs are escaped so chrono treats them as text.
pub fn to_strftime(fmt: &str) -> String {
    let chars: Vec<char> = fmt.chars().collect();
    let mut out = String::with_capacity(fmt.len() + 8);
    let mut pos = 0;
    while pos < chars.len() {
        match scan_token(&chars, pos) {
            Some((token, run)) => {
                out.push_str(token.strftime());
                pos += run;
            }
            None => {
                if chars[pos] == '%' {
                    out.push_str("%%");
                } else {
                    out.push(chars[pos]);
                }
                pos += 1;
            }
        }
    }
    out
}
