//! Channel palettes.
//!
//! A palette is an ordered list of distinct positive channel numbers. Order
//! is preference: the colorer always picks the earliest free channel.

use crate::error::{Error, Result};
use std::str::FromStr;

/// A channel number. Always positive once it is part of a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Channel(pub u32);

impl Channel {
    /// Get the raw channel number.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of distinct positive channels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u32>", into = "Vec<u32>"))]
pub struct Palette {
    channels: Vec<Channel>,
}

impl Palette {
    /// Build a palette, rejecting empty, zero or repeated channels.
    pub fn new(channels: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut seen = Vec::new();
        for c in channels {
            if c == 0 {
                return Err(Error::InvalidChannel(c));
            }
            if seen.contains(&Channel(c)) {
                return Err(Error::DuplicateChannel(c));
            }
            seen.push(Channel(c));
        }
        if seen.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { channels: seen })
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channels in preference order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Iterate channels in preference order.
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        self.channels.iter().copied()
    }

    /// Check membership.
    pub fn contains(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }
}

impl TryFrom<Vec<u32>> for Palette {
    type Error = Error;

    fn try_from(channels: Vec<u32>) -> Result<Self> {
        Self::new(channels)
    }
}

impl From<Palette> for Vec<u32> {
    fn from(palette: Palette) -> Self {
        palette.channels.into_iter().map(|c| c.0).collect()
    }
}

/// Parse a comma-separated list such as `"1, 6, 11"`.
impl FromStr for Palette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let channels = s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<u32>().map_err(|_| Error::UnparsableChannel(t.to_string())))
            .collect::<Result<Vec<_>>>()?;
        Self::new(channels)
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.channels.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
