/// How byte counts are rendered for people.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteUnitSystem {
    /// Plain byte count, e.g. `1536 bytes`.
    #[default]
    Raw,
    /// Powers of 1000, e.g. `1.54 kB`.
    SI,
    /// Powers of 1024, e.g. `1.50 KiB`.
    Binary,
}

impl ByteUnitSystem {
    const SI_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];
    const BINARY_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

    pub fn format(&self, bytes: u64) -> String {
        match self {
            Self::Raw => format!("{bytes} bytes"),
            Self::SI => Self::scale(bytes, 1000, &Self::SI_UNITS),
            Self::Binary => Self::scale(bytes, 1024, &Self::BINARY_UNITS),
        }
    }

    fn scale(bytes: u64, base: u32, units: &[&str; 7]) -> String {
        let base = base as f64;
        let mut value = bytes as f64;
        let mut unit = units[0];

        for &next_unit in &units[1..] {
            if value < base {
                break;
            }
            value /= base;
            unit = next_unit;
        }

        if unit == units[0] {
            format!("{bytes} {unit}")
        } else {
            format!("{value:.2} {unit}")
        }
    }
}
