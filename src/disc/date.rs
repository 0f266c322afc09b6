//! Timestamps found in directory records and volume descriptors

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Recording date of a directory record (7-byte binary form, seconds and
/// GMT offset are not kept)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordDate {
    /// Years since 1900
    pub year: u8,
    /// 1 to 12
    pub month: u8,
    /// 1 to 31
    pub day: u8,
    /// 0 to 23
    pub hour: u8,
    /// 0 to 59
    pub minute: u8,
}

impl RecordDate {
    /// Decode from the first five bytes of the recording date field
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            year: bytes[0],
            month: bytes[1],
            day: bytes[2],
            hour: bytes[3],
            minute: bytes[4],
        }
    }

    pub fn full_year(&self) -> u32 {
        1900 + self.year as u32
    }

    /// Abbreviated month name, `"???"` for an out-of-range month
    pub fn month_name(&self) -> &'static str {
        match self.month {
            1..=12 => MONTHS[self.month as usize - 1],
            _ => "???",
        }
    }

    /// Date formatted as "15 Jan 1980"
    pub fn format_date(&self) -> String {
        format!("{} {} {}", self.day, self.month_name(), self.full_year())
    }

    /// Time formatted as "16:30"
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Volume descriptor timestamp stored as ASCII digits ("YYYYMMDDHHMMSScc")
/// followed by a signed GMT offset in 15 minute steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub hundredths: u8,
    pub gmt_offset: i8,
}

impl DecDateTime {
    pub const LENGTH: usize = 17;

    /// Parse the 17-byte field. Non-digit characters count as zero.
    pub fn parse(bytes: &[u8]) -> Self {
        let digits = |range: std::ops::Range<usize>| -> u32 {
            bytes[range].iter().fold(0, |acc, &b| {
                let digit = if b.is_ascii_digit() { (b - b'0') as u32 } else { 0 };
                acc * 10 + digit
            })
        };

        Self {
            year: digits(0..4) as u16,
            month: digits(4..6) as u8,
            day: digits(6..8) as u8,
            hour: digits(8..10) as u8,
            minute: digits(10..12) as u8,
            second: digits(12..14) as u8,
            hundredths: digits(14..16) as u8,
            gmt_offset: bytes[16] as i8,
        }
    }

    /// An all-zero timestamp means "not specified"
    pub fn is_unset(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }
}

impl std::fmt::Display for DecDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unset() {
            return write!(f, "-");
        }
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
