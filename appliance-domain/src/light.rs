//! 电灯（Light）
//!
//! [`Appliance`] 的参考实现。状态以原子量保存，
//! 因而多个命令可以同时持有同一盏灯的共享引用。
//!
use crate::appliance::Appliance;
use crate::error::{DomainError, DomainResult};
use crate::power_state::PowerState;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// 带名称、可观测电源状态的电灯
pub struct Light {
    name: String,
    powered: AtomicBool,
    switches: AtomicUsize,
}

impl Light {
    /// 创建一盏处于关闭状态的灯
    ///
    /// # 示例
    ///
    /// ```
    /// use appliance_domain::{Appliance, Light, PowerState};
    ///
    /// let light = Light::new("living room").unwrap();
    /// assert_eq!(light.state(), PowerState::Off);
    ///
    /// light.on();
    /// assert_eq!(light.state(), PowerState::On);
    /// ```
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        Self::with_state(name, PowerState::Off)
    }

    /// 以指定初始状态创建
    pub fn with_state(name: impl Into<String>, state: PowerState) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidName {
                reason: "appliance name must not be blank".into(),
            });
        }

        Ok(Self {
            name,
            powered: AtomicBool::new(state.is_on()),
            switches: AtomicUsize::new(0),
        })
    }

    pub fn state(&self) -> PowerState {
        PowerState::from(self.powered.load(Ordering::SeqCst))
    }

    /// 被开/关的累计次数（包括状态未变化的重复操作）
    pub fn switch_count(&self) -> usize {
        self.switches.load(Ordering::SeqCst)
    }

    fn switch(&self, target: PowerState) {
        let previous = PowerState::from(self.powered.swap(target.is_on(), Ordering::SeqCst));
        self.switches.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(light = %self.name, from = %previous, to = %target, "light switched");
    }
}

impl Appliance for Light {
    fn on(&self) {
        self.switch(PowerState::On);
    }

    fn off(&self) {
        self.switch(PowerState::Off);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Light")
            .field("name", &self.name)
            .field("state", &self.state())
            .field("switches", &self.switch_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let err = Light::new("  ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidName { .. }));
    }

    #[test]
    fn switching_updates_state_and_counter() {
        let light = Light::with_state("porch", PowerState::On).unwrap();
        assert_eq!(light.state(), PowerState::On);
        assert_eq!(light.switch_count(), 0);

        light.off();
        light.off();
        assert_eq!(light.state(), PowerState::Off);
        assert_eq!(light.switch_count(), 2);

        light.on();
        assert_eq!(light.state(), PowerState::On);
        assert_eq!(light.name(), "porch");
    }
}
