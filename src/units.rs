/// Working hours in one day.
pub const HOURS_PER_DAY: i64 = 8;
/// Working days in one week.
pub const DAYS_PER_WEEK: i64 = 5;
/// Weeks in one month.
pub const WEEKS_PER_MONTH: i64 = 4;
/// Months in one year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Working hours in one week (`40`).
pub const HOURS_PER_WEEK: i64 = HOURS_PER_DAY * DAYS_PER_WEEK;
/// Working hours in one month (`160`).
pub const HOURS_PER_MONTH: i64 = HOURS_PER_WEEK * WEEKS_PER_MONTH;
/// Working hours in one year (`1920`).
pub const HOURS_PER_YEAR: i64 = HOURS_PER_MONTH * MONTHS_PER_YEAR;

/// A unit of the working calendar.
///
/// Every unit is a whole multiple of the hour, which is the base unit all
/// totals are stored in. Units are written as a single lowercase letter both
/// on input and on output, so a formatted total can be read back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// `h`
    Hour,
    /// `d`
    Day,
    /// `w`
    Week,
    /// `m`
    Month,
    /// `y`
    Year,
}

impl Unit {
    /// All units, largest first. This is the order the formatter emits them
    /// in.
    pub const DESCENDING: [Self; 5] = [Self::Year, Self::Month, Self::Week, Self::Day, Self::Hour];

    /// Returns how many hours one of this unit is worth.
    #[must_use]
    pub const fn hours(self) -> i64 {
        match self {
            Self::Hour => 1,
            Self::Day => HOURS_PER_DAY,
            Self::Week => HOURS_PER_WEEK,
            Self::Month => HOURS_PER_MONTH,
            Self::Year => HOURS_PER_YEAR,
        }
    }

    /// Returns the letter this unit is written with.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hour => 'h',
            Self::Day => 'd',
            Self::Week => 'w',
            Self::Month => 'm',
            Self::Year => 'y',
        }
    }

    /// Looks up the unit written as `letter`. Only lowercase letters match.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::DESCENDING.into_iter().find(|unit| unit.letter() == letter)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        };
        write!(f, "{name}")
    }
}
