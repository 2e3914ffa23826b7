//! Fixed catalogs: time slots, delivery types, drivers and trucks.
//!
//! Each catalog is a closed enumeration serialized as its display label, so
//! the persisted record keeps the same strings the dispatch board shows.
//! `FromStr` accepts either the label (case-insensitive) or a short key that
//! is easier to type on a command line.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Delivery window within a day.
///
/// Variants are declared in chronological order, so the derived `Ord` is the
/// board's left-to-right slot order rather than the lexicographic order of
/// the labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TimeSlot {
    #[default]
    #[serde(rename = "7:00–9:00")]
    Early,
    #[serde(rename = "9:00–11:00")]
    Morning,
    #[serde(rename = "11:00–1:00")]
    Midday,
    #[serde(rename = "1:00–3:00")]
    Afternoon,
    #[serde(rename = "3:00–5:00")]
    Late,
}

impl TimeSlot {
    /// Every slot in chronological order.
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::Early,
        TimeSlot::Morning,
        TimeSlot::Midday,
        TimeSlot::Afternoon,
        TimeSlot::Late,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Early => "7:00–9:00",
            TimeSlot::Morning => "9:00–11:00",
            TimeSlot::Midday => "11:00–1:00",
            TimeSlot::Afternoon => "1:00–3:00",
            TimeSlot::Late => "3:00–5:00",
        }
    }

    /// Short command-line key, e.g. `7-9`.
    pub fn key(&self) -> &'static str {
        match self {
            TimeSlot::Early => "7-9",
            TimeSlot::Morning => "9-11",
            TimeSlot::Midday => "11-1",
            TimeSlot::Afternoon => "1-3",
            TimeSlot::Late => "3-5",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    /// Parses `7:00–9:00`, `7:00-9:00` or `7-9`.
    ///
    /// ```rust
    /// use yard_core::models::TimeSlot;
    ///
    /// assert_eq!("11-1".parse::<TimeSlot>(), Ok(TimeSlot::Midday));
    /// assert_eq!("1:00–3:00".parse::<TimeSlot>(), Ok(TimeSlot::Afternoon));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .replace(['–', '—'], "-")
            .replace(":00", "")
            .replace(' ', "");
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.key() == key)
            .ok_or_else(|| format!("Invalid time slot: {s}"))
    }
}

/// How the load comes off the truck.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum DeliveryType {
    #[default]
    #[serde(rename = "General (dump)")]
    General,
    #[serde(rename = "Hand Unload (1 person)")]
    HandUnloadOne,
    #[serde(rename = "Hand Unload (2 people)")]
    HandUnloadTwo,
    #[serde(rename = "Forklift Unload (Donkey)")]
    ForkliftDonkey,
    #[serde(rename = "Forklift Unload (Moffett)")]
    ForkliftMoffett,
    /// Expedited run
    #[serde(rename = "Hotshot")]
    Hotshot,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 6] = [
        DeliveryType::General,
        DeliveryType::HandUnloadOne,
        DeliveryType::HandUnloadTwo,
        DeliveryType::ForkliftDonkey,
        DeliveryType::ForkliftMoffett,
        DeliveryType::Hotshot,
    ];

    /// The expedite type that flags a stop as a hotshot.
    pub const EXPEDITE: DeliveryType = DeliveryType::Hotshot;

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryType::General => "General (dump)",
            DeliveryType::HandUnloadOne => "Hand Unload (1 person)",
            DeliveryType::HandUnloadTwo => "Hand Unload (2 people)",
            DeliveryType::ForkliftDonkey => "Forklift Unload (Donkey)",
            DeliveryType::ForkliftMoffett => "Forklift Unload (Moffett)",
            DeliveryType::Hotshot => "Hotshot",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DeliveryType::General => "general",
            DeliveryType::HandUnloadOne => "hand-1",
            DeliveryType::HandUnloadTwo => "hand-2",
            DeliveryType::ForkliftDonkey => "donkey",
            DeliveryType::ForkliftMoffett => "moffett",
            DeliveryType::Hotshot => "hotshot",
        }
    }
}

impl FromStr for DeliveryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        DeliveryType::ALL
            .into_iter()
            .find(|t| t.key() == wanted || t.label().to_lowercase() == wanted)
            .ok_or_else(|| format!("Invalid delivery type: {s}"))
    }
}

/// Driver roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Driver {
    #[default]
    Jaime,
    Max,
    Nolan,
    Ryan,
    Travis,
    Justin,
}

impl Driver {
    pub const ALL: [Driver; 6] = [
        Driver::Jaime,
        Driver::Max,
        Driver::Nolan,
        Driver::Ryan,
        Driver::Travis,
        Driver::Justin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Driver::Jaime => "Jaime",
            Driver::Max => "Max",
            Driver::Nolan => "Nolan",
            Driver::Ryan => "Ryan",
            Driver::Travis => "Travis",
            Driver::Justin => "Justin",
        }
    }
}

impl FromStr for Driver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Driver::ALL
            .into_iter()
            .find(|d| d.label().to_lowercase() == wanted)
            .ok_or_else(|| format!("Invalid driver: {s}"))
    }
}

/// Truck roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Truck {
    #[default]
    #[serde(rename = "Int 1 (2019)")]
    International2019,
    #[serde(rename = "Int 2 (2016)")]
    International2016,
    #[serde(rename = "Int 2025 (Moffett Only)")]
    International2025,
    #[serde(rename = "Ram 4500")]
    Ram4500,
}

impl Truck {
    pub const ALL: [Truck; 4] = [
        Truck::International2019,
        Truck::International2016,
        Truck::International2025,
        Truck::Ram4500,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Truck::International2019 => "Int 1 (2019)",
            Truck::International2016 => "Int 2 (2016)",
            Truck::International2025 => "Int 2025 (Moffett Only)",
            Truck::Ram4500 => "Ram 4500",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Truck::International2019 => "int-1",
            Truck::International2016 => "int-2",
            Truck::International2025 => "int-2025",
            Truck::Ram4500 => "ram-4500",
        }
    }
}

impl FromStr for Truck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Truck::ALL
            .into_iter()
            .find(|t| t.key() == wanted || t.label().to_lowercase() == wanted)
            .ok_or_else(|| format!("Invalid truck: {s}"))
    }
}
