//! Channels and Per-Update Vitals
//!
//! Every update from the wearable carries up to five scalars, one per
//! [`Channel`]. On the wire each channel is addressed by a virtual pin key
//! (`"V0"`..`"V4"`), which is why [`Channel::key`] exists alongside the
//! descriptive name.
//!
//! Two containers move these values around:
//!
//! - [`RawVitals`]: a *partial* mapping as received. Any channel may be
//!   missing.
//! - [`VitalsReading`]: a *complete* set of filtered values, one per
//!   channel, produced by the filter bank once per update and never changed
//!   afterwards.

use core::fmt;
use core::ops::Index;

use crate::constants::CHANNEL_COUNT;

/// One of the five measured quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Ambient air temperature (°C), pin V0
    AtmosphericTemp,
    /// Relative humidity (%), pin V1
    Humidity,
    /// Body temperature (°C), pin V2
    BodyTemp,
    /// Blood oxygen saturation (%), pin V3
    SpO2,
    /// Heart rate (bpm), pin V4
    HeartRate,
}

impl Channel {
    /// All channels in pin order
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::AtmosphericTemp,
        Channel::Humidity,
        Channel::BodyTemp,
        Channel::SpO2,
        Channel::HeartRate,
    ];

    /// Position of this channel in [`Channel::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Virtual pin key used on the wire
    pub const fn key(self) -> &'static str {
        match self {
            Channel::AtmosphericTemp => "V0",
            Channel::Humidity => "V1",
            Channel::BodyTemp => "V2",
            Channel::SpO2 => "V3",
            Channel::HeartRate => "V4",
        }
    }

    /// Resolve a virtual pin key; unknown pins yield `None`
    pub fn from_key(key: &str) -> Option<Channel> {
        Channel::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Human-readable label with unit
    pub const fn label(self) -> &'static str {
        match self {
            Channel::AtmosphericTemp => "Atmospheric Temperature (°C)",
            Channel::Humidity => "Humidity (%)",
            Channel::BodyTemp => "Body Temperature (°C)",
            Channel::SpO2 => "SpO2 (%)",
            Channel::HeartRate => "Heart Rate (bpm)",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::AtmosphericTemp => "AtmosphericTemp",
            Channel::Humidity => "Humidity",
            Channel::BodyTemp => "BodyTemp",
            Channel::SpO2 => "SpO2",
            Channel::HeartRate => "HeartRate",
        };
        f.write_str(name)
    }
}

/// Raw values as received, any channel may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawVitals {
    values: [Option<f64>; CHANNEL_COUNT],
}

impl RawVitals {
    /// Empty update
    pub const fn new() -> Self {
        Self { values: [None; CHANNEL_COUNT] }
    }

    /// Update with every channel present, in pin order
    pub const fn complete(values: [f64; CHANNEL_COUNT]) -> Self {
        Self {
            values: [
                Some(values[0]),
                Some(values[1]),
                Some(values[2]),
                Some(values[3]),
                Some(values[4]),
            ],
        }
    }

    /// Builder-style setter
    pub fn with(mut self, channel: Channel, value: f64) -> Self {
        self.set(channel, value);
        self
    }

    /// Set a channel's raw value
    pub fn set(&mut self, channel: Channel, value: f64) {
        self.values[channel.index()] = Some(value);
    }

    /// Raw value for a channel, if it was sent
    pub fn get(&self, channel: Channel) -> Option<f64> {
        self.values[channel.index()]
    }

    /// Merge a pin-keyed value; returns `false` for an unknown pin
    ///
    /// Sensor hubs often forward extra pins (battery level, button state)
    /// along with the vitals, so unknown keys are not an error.
    pub fn set_key(&mut self, key: &str, value: f64) -> bool {
        match Channel::from_key(key) {
            Some(channel) => {
                self.set(channel, value);
                true
            }
            None => false,
        }
    }

    /// Number of channels present
    pub fn present(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// True if no channel is present
    pub fn is_empty(&self) -> bool {
        self.present() == 0
    }
}

impl<'a> FromIterator<(&'a str, f64)> for RawVitals {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut raw = RawVitals::new();
        for (key, value) in iter {
            raw.set_key(key, value);
        }
        raw
    }
}

// Deserialized from a pin-keyed object; unknown pins are skipped and a
// `null` value counts as absent
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RawVitals {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PinVisitor;

        impl<'de> serde::de::Visitor<'de> for PinVisitor {
            type Value = RawVitals;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by virtual pin (\"V0\"..\"V4\")")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(self, mut map: A) -> Result<RawVitals, A::Error> {
                let mut raw = RawVitals::new();
                while let Some(key) = map.next_key::<alloc::string::String>()? {
                    match Channel::from_key(&key) {
                        Some(channel) => {
                            if let Some(value) = map.next_value::<Option<f64>>()? {
                                raw.set(channel, value);
                            }
                        }
                        None => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(raw)
            }
        }

        deserializer.deserialize_map(PinVisitor)
    }
}

/// Filtered values for all channels from one update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VitalsReading {
    values: [f64; CHANNEL_COUNT],
}

impl VitalsReading {
    /// Build from values in pin order
    pub const fn from_array(values: [f64; CHANNEL_COUNT]) -> Self {
        Self { values }
    }

    /// Filtered value for a channel
    pub fn get(&self, channel: Channel) -> f64 {
        self.values[channel.index()]
    }

    /// Values in pin order
    pub fn as_array(&self) -> &[f64; CHANNEL_COUNT] {
        &self.values
    }

    /// `(channel, value)` pairs in pin order
    pub fn iter(&self) -> impl Iterator<Item = (Channel, f64)> + '_ {
        Channel::ALL.into_iter().map(move |c| (c, self.values[c.index()]))
    }

    /// Ambient temperature (°C)
    pub fn atmospheric_temp(&self) -> f64 {
        self.get(Channel::AtmosphericTemp)
    }

    /// Relative humidity (%)
    pub fn humidity(&self) -> f64 {
        self.get(Channel::Humidity)
    }

    /// Body temperature (°C)
    pub fn body_temp(&self) -> f64 {
        self.get(Channel::BodyTemp)
    }

    /// Blood oxygen saturation (%)
    pub fn spo2(&self) -> f64 {
        self.get(Channel::SpO2)
    }

    /// Heart rate (bpm)
    pub fn heart_rate(&self) -> f64 {
        self.get(Channel::HeartRate)
    }
}

impl Index<Channel> for VitalsReading {
    type Output = f64;

    fn index(&self, channel: Channel) -> &f64 {
        &self.values[channel.index()]
    }
}

// Serialized keyed by pin so consumers see {"V0": .., "V1": ..}
#[cfg(feature = "serde")]
impl serde::Serialize for VitalsReading {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(CHANNEL_COUNT))?;
        for (channel, value) in self.iter() {
            map.serialize_entry(channel.key(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for channel in Channel::ALL {
            assert_eq!(Channel::from_key(channel.key()), Some(channel));
        }
        assert_eq!(Channel::from_key("V5"), None);
    }

    #[test]
    fn index_matches_pin_order() {
        for (i, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
    }

    #[test]
    fn raw_vitals_from_pins() {
        let raw: RawVitals = [("V0", 30.0), ("V2", 37.0), ("V5", 1.0)]
            .into_iter()
            .collect();

        assert_eq!(raw.get(Channel::AtmosphericTemp), Some(30.0));
        assert_eq!(raw.get(Channel::BodyTemp), Some(37.0));
        assert_eq!(raw.get(Channel::HeartRate), None);
        assert_eq!(raw.present(), 2);
    }

    #[test]
    fn reading_accessors() {
        let reading = VitalsReading::from_array([30.0, 50.0, 37.0, 98.0, 80.0]);
        assert_eq!(reading.atmospheric_temp(), 30.0);
        assert_eq!(reading.humidity(), 50.0);
        assert_eq!(reading.body_temp(), 37.0);
        assert_eq!(reading.spo2(), 98.0);
        assert_eq!(reading.heart_rate(), 80.0);
        assert_eq!(reading[Channel::SpO2], 98.0);
    }
}
