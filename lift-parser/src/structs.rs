#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How full a time slot is, judged by the spots still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FillLevel {
    Low,
    Medium,
    High,
}

impl FillLevel {
    /// More than 30 open spots is `Low`, 16 to 30 is `Medium`, 15 or fewer is `High`.
    #[must_use]
    pub fn from_available(available: u32) -> Self {
        match available {
            31.. => FillLevel::Low,
            16..=30 => FillLevel::Medium,
            _ => FillLevel::High,
        }
    }
}

/// One bookable weight room slot.
///
/// `start_time` and `end_time` are `H.MM` decimals on a 24 hour clock, so
/// `6:30 pm` is stored as `18.30`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiftTime {
    pub start_time: f64,
    pub end_time: f64,
    pub spots_remaining: u32,
    pub total_spots: u32,
    /// `MM/DD/YYYY`, exactly as it appears in the booking link.
    pub date: String,
    pub fill_level: FillLevel,
}

impl LiftTime {
    #[must_use]
    pub fn new(date: String, start_time: f64, end_time: f64, available: u32, total: u32) -> Self {
        Self {
            start_time,
            end_time,
            spots_remaining: available,
            total_spots: total,
            date,
            fill_level: FillLevel::from_available(available),
        }
    }

    /// Start time in hundredths of an hour, usable as an exact map key.
    #[must_use]
    pub fn start_key(&self) -> u32 {
        hour_key(self.start_time)
    }
}

pub(crate) fn hour_key(hour: f64) -> u32 {
    (hour * 100.0).round() as u32
}
