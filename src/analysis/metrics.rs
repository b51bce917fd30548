use serde::{Deserialize, Serialize};

/// A single already-sampled pixel.
///
/// Components are expected in `[0, 255]` but are not bounded here, out of
/// range values flow through the arithmetic untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbSample {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl RgbSample {
    pub fn new(r: i64, g: i64, b: i64) -> Self {
        RgbSample { r, g, b }
    }

    pub fn is_within_byte_range(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0..=255).contains(c))
    }

    /// `#rrggbb`, lowercase, two digits per channel.
    ///
    /// A channel that does not fit in a byte is written out as is: negative
    /// values keep their sign (`-5`), values above 255 get more digits (`12c`).
    pub fn to_hex(&self) -> String {
        format!(
            "#{}{}{}",
            hex_channel(self.r),
            hex_channel(self.g),
            hex_channel(self.b)
        )
    }
}

fn hex_channel(value: i64) -> String {
    if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{:02x}", value)
    }
}

/// Scalars derived from a sample, recomputed on every classification.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMetrics {
    pub warmth: f64,
    pub green_balance: f64,
    pub brightness: f64,
}

impl ColorMetrics {
    pub fn from_sample(sample: &RgbSample) -> Self {
        let (r, g, b) = (sample.r as f64, sample.g as f64, sample.b as f64);
        ColorMetrics {
            warmth: (r - b) / 255.0,
            // The +1 keeps a black sample away from a zero denominator.
            green_balance: g / (r + g + b + 1.0),
            brightness: (r + g + b) / 3.0,
        }
    }
}
