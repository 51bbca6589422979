//! 电源状态（PowerState）
//!
//! 无标识、以值相等为准的值对象，描述电器当前是否通电。
//!
use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 电源状态
///
/// # 示例
///
/// ```
/// use appliance_domain::PowerState;
///
/// let s = PowerState::default();
/// assert_eq!(s, PowerState::Off);
/// assert_eq!(s.inverse(), PowerState::On);
/// assert_eq!("on".parse::<PowerState>().unwrap(), PowerState::On);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    pub const fn is_on(self) -> bool {
        matches!(self, PowerState::On)
    }

    /// 相反状态（撤销操作据此恢复）
    pub const fn inverse(self) -> Self {
        match self {
            PowerState::On => PowerState::Off,
            PowerState::Off => PowerState::On,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PowerState::On => "on",
            PowerState::Off => "off",
        }
    }
}

impl From<bool> for PowerState {
    fn from(powered: bool) -> Self {
        if powered {
            PowerState::On
        } else {
            PowerState::Off
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(PowerState::On),
            "off" => Ok(PowerState::Off),
            other => Err(DomainError::InvalidValue {
                reason: format!("unknown power state `{other}`"),
            }),
        }
    }
}
