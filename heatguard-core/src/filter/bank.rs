//! Filter bank: five channel filters behind one ingest call
//!
//! The bank owns, per channel, a [`ConstantVelocityFilter`], the
//! [`ChannelValidator`] that guards it and bounded raw/filtered histories.
//! An update is validated in full before any filter moves, so a rejected
//! update under [`InvalidReadingPolicy::FailUpdate`] leaves the bank exactly
//! as it was.

use alloc::vec::Vec;

use crate::{
    buffer::CircularBuffer,
    channel::{Channel, RawVitals, VitalsReading},
    constants::{CHANNEL_COUNT, REPORT_DECIMALS, SAMPLE_HISTORY_SIZE},
    errors::{ReadingError, ReadingResult},
    filter::kalman::{ChannelTuning, ConstantVelocityFilter},
    math::round_to,
    traits::Validator,
    validators::ChannelValidator,
};

/// What to feed a channel that is absent from an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingChannelPolicy {
    /// Feed 0.0 to a channel that has not been sent
    #[default]
    ZeroFill,
    /// Re-feed the last accepted raw value (0.0 if none yet)
    ///
    /// Matches a hub that merges each partial update into its latest
    /// known vitals.
    CarryForward,
}

/// What to do when a present value fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidReadingPolicy {
    /// Skip the channel and report its last filtered value
    #[default]
    HoldLast,
    /// Refuse the whole update
    FailUpdate,
}

/// Filter bank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterBankConfig {
    /// Noise tuning per channel, in pin order
    pub tunings: [ChannelTuning; CHANNEL_COUNT],
    /// Handling of channels absent from an update
    pub missing: MissingChannelPolicy,
    /// Handling of channels that fail validation
    pub invalid: InvalidReadingPolicy,
    /// Reject finite values outside each channel's physical range
    pub enforce_ranges: bool,
}

impl Default for FilterBankConfig {
    fn default() -> Self {
        Self {
            tunings: Channel::ALL.map(ChannelTuning::for_channel),
            missing: MissingChannelPolicy::default(),
            invalid: InvalidReadingPolicy::default(),
            enforce_ranges: true,
        }
    }
}

impl FilterBankConfig {
    /// Override one channel's tuning
    pub fn with_tuning(mut self, channel: Channel, tuning: ChannelTuning) -> Self {
        self.tunings[channel.index()] = tuning;
        self
    }

    /// Set the missing-channel policy
    pub fn with_missing_policy(mut self, policy: MissingChannelPolicy) -> Self {
        self.missing = policy;
        self
    }

    /// Set the invalid-reading policy
    pub fn with_invalid_policy(mut self, policy: InvalidReadingPolicy) -> Self {
        self.invalid = policy;
        self
    }

    /// Toggle physical range enforcement
    pub fn with_range_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_ranges = enforce;
        self
    }

    /// Tuning for one channel
    pub fn tuning(&self, channel: Channel) -> &ChannelTuning {
        &self.tunings[channel.index()]
    }
}

/// Result of ingesting one update
#[derive(Debug, Clone, PartialEq)]
pub struct BankUpdate {
    /// Filtered values for all channels
    pub reading: VitalsReading,
    /// Channels that were rejected and held at their last value
    pub rejected: heapless::Vec<ReadingError, CHANNEL_COUNT>,
}

/// Raw and filtered samples of one channel, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelSeries {
    /// Values as fed to the filter
    pub raw: Vec<f64>,
    /// Rounded filter output
    pub filtered: Vec<f64>,
}

/// Owned copy of every channel's sample history
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChannelHistory {
    series: [ChannelSeries; CHANNEL_COUNT],
}

impl ChannelHistory {
    /// Samples of one channel
    pub fn channel(&self, channel: Channel) -> &ChannelSeries {
        &self.series[channel.index()]
    }

    /// Raw samples of one channel
    pub fn raw(&self, channel: Channel) -> &[f64] {
        &self.series[channel.index()].raw
    }

    /// Filtered samples of one channel
    pub fn filtered(&self, channel: Channel) -> &[f64] {
        &self.series[channel.index()].filtered
    }

    /// `(channel, series)` pairs in pin order
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &ChannelSeries)> + '_ {
        Channel::ALL.into_iter().zip(self.series.iter())
    }
}

// Keyed by pin: {"V0": {"raw": [..], "filtered": [..]}, ..}
#[cfg(feature = "serde")]
impl serde::Serialize for ChannelHistory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(CHANNEL_COUNT))?;
        for (channel, series) in self.iter() {
            map.serialize_entry(channel.key(), series)?;
        }
        map.end()
    }
}

/// Five independent channel filters with validation and histories
#[derive(Debug, Clone)]
pub struct FilterBank {
    filters: [ConstantVelocityFilter; CHANNEL_COUNT],
    validators: [ChannelValidator; CHANNEL_COUNT],
    raw_history: [CircularBuffer<f64, SAMPLE_HISTORY_SIZE>; CHANNEL_COUNT],
    filtered_history: [CircularBuffer<f64, SAMPLE_HISTORY_SIZE>; CHANNEL_COUNT],
    /// Last value that passed validation, for carry-forward
    last_accepted_raw: [Option<f64>; CHANNEL_COUNT],
    config: FilterBankConfig,
}

impl FilterBank {
    /// Bank with every filter at rest
    pub fn new(config: FilterBankConfig) -> Self {
        Self {
            filters: config.tunings.map(ConstantVelocityFilter::new),
            validators: Channel::ALL.map(|channel| {
                ChannelValidator::for_channel(channel).with_range_enforced(config.enforce_ranges)
            }),
            raw_history: core::array::from_fn(|_| CircularBuffer::new()),
            filtered_history: core::array::from_fn(|_| CircularBuffer::new()),
            last_accepted_raw: [None; CHANNEL_COUNT],
            config,
        }
    }

    /// Validate and filter a single channel value
    ///
    /// Returns the filtered value rounded for reporting. On error nothing is
    /// mutated.
    pub fn ingest(&mut self, channel: Channel, raw: f64) -> ReadingResult<f64> {
        self.validators[channel.index()].validate(raw)?;
        Ok(self.apply(channel, raw))
    }

    /// Filter one update across all channels
    ///
    /// Missing channels are resolved with the configured
    /// [`MissingChannelPolicy`]. Present values are all validated first:
    ///
    /// - if every channel fails, the update is refused with
    ///   [`ReadingError::NoUsableChannels`]
    /// - under [`InvalidReadingPolicy::FailUpdate`] the first failure is
    ///   returned
    /// - under [`InvalidReadingPolicy::HoldLast`] failing channels keep their
    ///   last filtered value and are listed in [`BankUpdate::rejected`]
    ///
    /// In both error cases the bank is left untouched.
    pub fn ingest_all(&mut self, raw: &RawVitals) -> ReadingResult<BankUpdate> {
        let resolved = Channel::ALL.map(|channel| self.resolve(raw, channel));

        let mut rejected: heapless::Vec<ReadingError, CHANNEL_COUNT> = heapless::Vec::new();
        let mut accepted = [false; CHANNEL_COUNT];
        for channel in Channel::ALL {
            let i = channel.index();
            match self.validators[i].validate(resolved[i]) {
                Ok(()) => accepted[i] = true,
                // At most one error per channel, capacity is the channel count
                Err(err) => {
                    let _ = rejected.push(err);
                }
            }
        }

        if rejected.len() == CHANNEL_COUNT {
            log_warn!("Update refused: all {} channels rejected", CHANNEL_COUNT);
            return Err(ReadingError::NoUsableChannels);
        }

        if self.config.invalid == InvalidReadingPolicy::FailUpdate {
            if let Some(first) = rejected.first() {
                log_warn!("Update refused: {}", first);
                return Err(*first);
            }
        }

        #[cfg(feature = "log")]
        for err in rejected.iter() {
            log_warn!("Holding last value: {}", err);
        }

        let values = Channel::ALL.map(|channel| {
            let i = channel.index();
            if accepted[i] {
                self.apply(channel, resolved[i])
            } else {
                self.last_filtered(channel).unwrap_or(0.0)
            }
        });

        let reading = VitalsReading::from_array(values);
        log_debug!("Filtered update: {:?}", reading.as_array());

        Ok(BankUpdate { reading, rejected })
    }

    fn resolve(&self, raw: &RawVitals, channel: Channel) -> f64 {
        match raw.get(channel) {
            Some(value) => value,
            None => match self.config.missing {
                MissingChannelPolicy::ZeroFill => 0.0,
                MissingChannelPolicy::CarryForward => {
                    self.last_accepted_raw[channel.index()].unwrap_or(0.0)
                }
            },
        }
    }

    /// Run a validated value through its filter and record it
    fn apply(&mut self, channel: Channel, raw: f64) -> f64 {
        let i = channel.index();
        let position = self.filters[i].step(raw);
        let filtered = round_to(position, REPORT_DECIMALS);

        self.raw_history[i].push(raw);
        self.filtered_history[i].push(filtered);
        self.last_accepted_raw[i] = Some(raw);

        filtered
    }

    /// Most recent reported value of a channel
    pub fn last_filtered(&self, channel: Channel) -> Option<f64> {
        self.filtered_history[channel.index()].last().copied()
    }

    /// Filter state of a channel
    pub fn filter(&self, channel: Channel) -> &ConstantVelocityFilter {
        &self.filters[channel.index()]
    }

    /// Raw samples of a channel, oldest first
    pub fn raw_history(&self, channel: Channel) -> impl DoubleEndedIterator<Item = f64> + '_ {
        self.raw_history[channel.index()].iter().copied()
    }

    /// Filtered samples of a channel, oldest first
    pub fn filtered_history(&self, channel: Channel) -> impl DoubleEndedIterator<Item = f64> + '_ {
        self.filtered_history[channel.index()].iter().copied()
    }

    /// Owned copy of all sample histories
    pub fn history(&self) -> ChannelHistory {
        ChannelHistory {
            series: Channel::ALL.map(|channel| {
                let i = channel.index();
                ChannelSeries {
                    raw: self.raw_history[i].to_vec(),
                    filtered: self.filtered_history[i].to_vec(),
                }
            }),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &FilterBankConfig {
        &self.config
    }

    /// Return every filter to rest and drop all histories
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}

impl Default for FilterBank {
    fn default() -> Self {
        Self::new(FilterBankConfig::default())
    }
}
