//! Bengali solar months and the Bangabda era.
//!
//! Each solar month starts with a Sankranti, the Sun's entry into a
//! sidereal sign: Boishakh begins with Mesha (0°), Joishtho with Vrishabha
//! (30°), and so on.

/// Years between the Gregorian and Bangabda eras for Boishakh..Poush.
pub const BANGABDA_ERA_OFFSET: i32 = 593;

/// The twelve Bengali solar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BengaliMonth {
    Boishakh,
    Joishtho,
    Asharh,
    Shrabon,
    Bhadro,
    Ashwin,
    Kartik,
    Ogrohayon,
    Poush,
    Magh,
    Falgun,
    Chaitra,
}

/// All months in order (index 0 = Boishakh).
pub const ALL_BENGALI_MONTHS: [BengaliMonth; 12] = [
    BengaliMonth::Boishakh,
    BengaliMonth::Joishtho,
    BengaliMonth::Asharh,
    BengaliMonth::Shrabon,
    BengaliMonth::Bhadro,
    BengaliMonth::Ashwin,
    BengaliMonth::Kartik,
    BengaliMonth::Ogrohayon,
    BengaliMonth::Poush,
    BengaliMonth::Magh,
    BengaliMonth::Falgun,
    BengaliMonth::Chaitra,
];

impl BengaliMonth {
    /// Month for a 1-based index (1..=12). Out-of-range values wrap.
    pub fn from_index(index: u32) -> Self {
        ALL_BENGALI_MONTHS[((index.max(1) - 1) % 12) as usize]
    }

    /// Month whose Sankranti is the Sun's entry into `rashi_index` (0 = Mesha).
    pub fn from_rashi_index(rashi_index: u32) -> Self {
        ALL_BENGALI_MONTHS[(rashi_index % 12) as usize]
    }

    /// 1-based month number (1..=12).
    pub fn index(self) -> u32 {
        self as u32 + 1
    }

    /// Whether day 1 of this month falls in the Gregorian year after the
    /// one in which the Bangabda year began (Magh, Falgun, Chaitra).
    pub fn starts_in_next_gregorian_year(self) -> bool {
        self.index() >= 10
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Boishakh => "Boishakh",
            Self::Joishtho => "Joishtho",
            Self::Asharh => "Asharh",
            Self::Shrabon => "Shrabon",
            Self::Bhadro => "Bhadro",
            Self::Ashwin => "Ashwin",
            Self::Kartik => "Kartik",
            Self::Ogrohayon => "Ogrohayon",
            Self::Poush => "Poush",
            Self::Magh => "Magh",
            Self::Falgun => "Falgun",
            Self::Chaitra => "Chaitra",
        }
    }
}

/// Bangabda year for a month whose day 1 falls in `gregorian_year`.
pub fn bangabda_year(month: BengaliMonth, gregorian_year: i32, era_offset: i32) -> i32 {
    let base = gregorian_year - era_offset;
    if month.starts_in_next_gregorian_year() {
        base - 1
    } else {
        base
    }
}
