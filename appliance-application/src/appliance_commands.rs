//! 电器开关命令
//!
//! `TurnOn` 与 `TurnOff` 互为镜像：各自借用一个电器，
//! `execute` 调用一项能力，`undo` 调用其逆能力。命令不拥有电器，
//! 也不管理其生命周期；构造后不可变。
//!
//! 协作者必须实现 [`Appliance`]，否则无法通过编译：
//!
//! ```compile_fail
//! use appliance_application::TurnOn;
//!
//! let not_an_appliance = 7_u8;
//! let _cmd = TurnOn::new(&not_an_appliance);
//! ```
//!
//! ```compile_fail
//! use appliance_application::TurnOff;
//!
//! let _cmd = TurnOff::new(&"lamp");
//! ```
//!
use crate::command::Command;
use appliance_domain::Appliance;
use std::fmt;

/// 打开电器；撤销时关闭
pub struct TurnOn<'a, A>
where
    A: Appliance + ?Sized,
{
    appliance: &'a A,
}

impl<'a, A> TurnOn<'a, A>
where
    A: Appliance + ?Sized,
{
    pub const NAME: &'static str = "appliance.turn_on";

    pub fn new(appliance: &'a A) -> Self {
        Self { appliance }
    }

    pub fn appliance(&self) -> &'a A {
        self.appliance
    }
}

impl<A> Command for TurnOn<'_, A>
where
    A: Appliance + ?Sized,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn execute(&self) {
        tracing::debug!(command = Self::NAME, appliance = self.appliance.name(), "execute");
        self.appliance.on();
    }

    fn undo(&self) {
        tracing::debug!(command = Self::NAME, appliance = self.appliance.name(), "undo");
        self.appliance.off();
    }
}

/// 关闭电器；撤销时打开
pub struct TurnOff<'a, A>
where
    A: Appliance + ?Sized,
{
    appliance: &'a A,
}

impl<'a, A> TurnOff<'a, A>
where
    A: Appliance + ?Sized,
{
    pub const NAME: &'static str = "appliance.turn_off";

    pub fn new(appliance: &'a A) -> Self {
        Self { appliance }
    }

    pub fn appliance(&self) -> &'a A {
        self.appliance
    }
}

impl<A> Command for TurnOff<'_, A>
where
    A: Appliance + ?Sized,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn execute(&self) {
        tracing::debug!(command = Self::NAME, appliance = self.appliance.name(), "execute");
        self.appliance.off();
    }

    fn undo(&self) {
        tracing::debug!(command = Self::NAME, appliance = self.appliance.name(), "undo");
        self.appliance.on();
    }
}

// 只复制引用，不要求 A: Clone
impl<A: Appliance + ?Sized> Clone for TurnOn<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Appliance + ?Sized> Copy for TurnOn<'_, A> {}

impl<A: Appliance + ?Sized> Clone for TurnOff<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Appliance + ?Sized> Copy for TurnOff<'_, A> {}

impl<A: Appliance + ?Sized> fmt::Debug for TurnOn<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnOn")
            .field("appliance", &self.appliance.name())
            .finish()
    }
}

impl<A: Appliance + ?Sized> fmt::Debug for TurnOff<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnOff")
            .field("appliance", &self.appliance.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appliance_domain::{Light, PowerState};
    use std::sync::Mutex;

    /// 记录调用序列的电器，便于断言命令只调用了一项能力
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<&'static str>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Appliance for Recorder {
        fn on(&self) {
            self.calls.lock().unwrap().push("on");
        }

        fn off(&self) {
            self.calls.lock().unwrap().push("off");
        }
    }

    #[test]
    fn turn_on_from_off_then_undo() {
        let light = Light::new("kitchen").unwrap();
        let cmd = TurnOn::new(&light);

        cmd.execute();
        assert_eq!(light.state(), PowerState::On);

        cmd.undo();
        assert_eq!(light.state(), PowerState::Off);
    }

    #[test]
    fn turn_off_from_on_then_undo() {
        let light = Light::with_state("kitchen", PowerState::On).unwrap();
        let cmd = TurnOff::new(&light);

        cmd.execute();
        assert_eq!(light.state(), PowerState::Off);

        cmd.undo();
        assert_eq!(light.state(), PowerState::On);
    }

    #[test]
    fn each_operation_is_a_single_call() {
        let rec = Recorder::default();
        let on = TurnOn::new(&rec);
        let off = TurnOff::new(&rec);

        on.execute();
        on.undo();
        off.execute();
        off.undo();

        assert_eq!(rec.calls(), vec!["on", "off", "off", "on"]);
    }

    #[test]
    fn execute_then_undo_restores_state_it_moved_away_from() {
        let off_light = Light::with_state("hall", PowerState::Off).unwrap();
        let on_light = Light::with_state("hall", PowerState::On).unwrap();
        let on = TurnOn::new(&off_light);
        let off = TurnOff::new(&on_light);

        for (cmd, light, initial) in [
            (&on as &dyn Command, &off_light, PowerState::Off),
            (&off as &dyn Command, &on_light, PowerState::On),
        ] {
            cmd.execute();
            assert_eq!(light.state(), initial.inverse(), "{} from {initial}", cmd.name());
            cmd.undo();
            assert_eq!(light.state(), initial, "{} from {initial}", cmd.name());
        }
    }

    #[test]
    fn undo_applies_inverse_not_previous_state() {
        // 已开的灯再执行 TurnOn，撤销后仍会关闭
        let light = Light::with_state("hall", PowerState::On).unwrap();
        let on = TurnOn::new(&light);
        on.execute();
        assert_eq!(light.state(), PowerState::On);
        on.undo();
        assert_eq!(light.state(), PowerState::Off);

        let light = Light::with_state("hall", PowerState::Off).unwrap();
        let off = TurnOff::new(&light);
        off.execute();
        off.undo();
        assert_eq!(light.state(), PowerState::On);
    }

    #[test]
    fn construction_does_not_touch_appliance() {
        let light = Light::new("garage").unwrap();
        let on = TurnOn::new(&light);
        let _copy = on;
        let _off = TurnOff::new(&light);
        assert_eq!(light.switch_count(), 0);
        assert_eq!(light.state(), PowerState::Off);
    }

    #[test]
    fn works_through_trait_objects() {
        let light = Light::new("desk").unwrap();
        let dynamic: &dyn Appliance = &light;
        let cmd = TurnOn::new(dynamic);

        assert_eq!(cmd.name(), "appliance.turn_on");
        assert_eq!(format!("{cmd:?}"), "TurnOn { appliance: \"desk\" }");

        cmd.execute();
        assert_eq!(light.state(), PowerState::On);
        assert_eq!(cmd.appliance().name(), "desk");
    }
}
