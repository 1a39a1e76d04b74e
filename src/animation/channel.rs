use std::fmt;
use std::str::FromStr;

use crate::foundation::error::StageError;

/// A closed set of animatable scalar channels, addressable by dotted name.
pub trait Channel: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn parse(name: &str) -> Result<Self, StageError> {
        let trimmed = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == trimmed)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|c| c.name()).collect();
                StageError::binding(format!(
                    "unknown channel '{trimmed}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

/// Channels of an animated scene-graph node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NodeChannel {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    ScaleUniform,
    Opacity,
}

impl Channel for NodeChannel {
    const ALL: &'static [Self] = &[
        Self::PositionX,
        Self::PositionY,
        Self::PositionZ,
        Self::RotationX,
        Self::RotationY,
        Self::RotationZ,
        Self::ScaleUniform,
        Self::Opacity,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::PositionX => "position.x",
            Self::PositionY => "position.y",
            Self::PositionZ => "position.z",
            Self::RotationX => "rotation.x",
            Self::RotationY => "rotation.y",
            Self::RotationZ => "rotation.z",
            Self::ScaleUniform => "scale.uniform",
            Self::Opacity => "opacity",
        }
    }
}

/// Channels of a camera rig.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RigChannel {
    PositionX,
    PositionY,
    PositionZ,
    TargetX,
    TargetY,
    TargetZ,
    FieldOfView,
}

impl Channel for RigChannel {
    const ALL: &'static [Self] = &[
        Self::PositionX,
        Self::PositionY,
        Self::PositionZ,
        Self::TargetX,
        Self::TargetY,
        Self::TargetZ,
        Self::FieldOfView,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::PositionX => "position.x",
            Self::PositionY => "position.y",
            Self::PositionZ => "position.z",
            Self::TargetX => "target.x",
            Self::TargetY => "target.y",
            Self::TargetZ => "target.z",
            Self::FieldOfView => "fov",
        }
    }
}

macro_rules! channel_string_impls {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = StageError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Channel>::parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = StageError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                <Self as Channel>::parse(&s)
            }
        }

        impl From<$ty> for String {
            fn from(c: $ty) -> Self {
                c.name().to_owned()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

channel_string_impls!(NodeChannel);
channel_string_impls!(RigChannel);

#[cfg(test)]
#[path = "../../tests/unit/animation/channel.rs"]
mod tests;
