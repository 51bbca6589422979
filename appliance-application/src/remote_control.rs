//! 遥控器（RemoteControl）
//!
//! 命令的调用者（invoker）：若干编号插槽，每个插槽装一对“开/关”命令，
//! 并维护一份 [`CommandHistory`] 以支持多步撤销。
//!
//! 典型用法：
//! ```rust
//! use appliance_application::{RemoteConfig, RemoteControl, TurnOff, TurnOn};
//! use appliance_domain::{Light, PowerState};
//!
//! let light = Light::new("living room").unwrap();
//! let mut remote = RemoteControl::new(RemoteConfig::builder().slots(2).build()).unwrap();
//! remote.set_command(0, TurnOn::new(&light), TurnOff::new(&light)).unwrap();
//!
//! remote.press_on(0).unwrap();
//! assert_eq!(light.state(), PowerState::On);
//!
//! remote.undo().unwrap();
//! assert_eq!(light.state(), PowerState::Off);
//! ```
use crate::{
    command::Command,
    config::RemoteConfig,
    error::{AppError, AppResult},
    history::CommandHistory,
};
use std::fmt;
use std::sync::Arc;

type SharedCommand<'a> = Arc<dyn Command + 'a>;

struct Slot<'a> {
    on: SharedCommand<'a>,
    off: SharedCommand<'a>,
}

pub struct RemoteControl<'a> {
    slots: Vec<Option<Slot<'a>>>,
    history: CommandHistory<'a>,
}

impl<'a> RemoteControl<'a> {
    pub fn new(config: RemoteConfig) -> AppResult<Self> {
        config.validate()?;

        let slots = std::iter::repeat_with(|| None).take(config.slots).collect();

        Ok(Self {
            slots,
            history: CommandHistory::with_limit(config.history_limit()),
        })
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn history(&self) -> &CommandHistory<'a> {
        &self.history
    }

    /// 在插槽中安装一对命令（覆盖原有命令，不影响历史）
    pub fn set_command<On, Off>(&mut self, slot: usize, on: On, off: Off) -> AppResult<()>
    where
        On: Command + 'a,
        Off: Command + 'a,
    {
        let slots = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(AppError::SlotOutOfRange { slot, slots })?;

        tracing::debug!(slot, on = on.name(), off = off.name(), "slot configured");
        *entry = Some(Slot {
            on: Arc::new(on),
            off: Arc::new(off),
        });
        Ok(())
    }

    /// 清空插槽
    pub fn clear_slot(&mut self, slot: usize) -> AppResult<()> {
        let slots = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(AppError::SlotOutOfRange { slot, slots })?;
        *entry = None;
        Ok(())
    }

    /// 插槽中已安装的命令名 `(on, off)`；空插槽返回 `None`
    pub fn slot_names(&self, slot: usize) -> AppResult<Option<(&'static str, &'static str)>> {
        let entry = self.slot(slot)?;
        Ok(entry.as_ref().map(|s| (s.on.name(), s.off.name())))
    }

    pub fn press_on(&mut self, slot: usize) -> AppResult<()> {
        let command = self.installed(slot)?.on.clone();
        tracing::info!(slot, command = command.name(), "on pressed");
        self.run(command);
        Ok(())
    }

    pub fn press_off(&mut self, slot: usize) -> AppResult<()> {
        let command = self.installed(slot)?.off.clone();
        tracing::info!(slot, command = command.name(), "off pressed");
        self.run(command);
        Ok(())
    }

    /// 直接执行任意命令并记入历史
    pub fn invoke<C>(&mut self, command: C)
    where
        C: Command + 'a,
    {
        self.run(Arc::new(command));
    }

    /// 撤销最近一次执行的命令，返回其名称
    pub fn undo(&mut self) -> AppResult<&'static str> {
        let Some(command) = self.history.pop() else {
            tracing::warn!("undo requested with empty history");
            return Err(AppError::NothingToUndo);
        };

        let name = command.name();
        tracing::info!(command = name, "undo");
        command.undo();
        Ok(name)
    }

    fn run(&mut self, command: SharedCommand<'a>) {
        command.execute();
        self.history.push(command);
    }

    fn slot(&self, slot: usize) -> AppResult<&Option<Slot<'a>>> {
        self.slots.get(slot).ok_or(AppError::SlotOutOfRange {
            slot,
            slots: self.slots.len(),
        })
    }

    fn installed(&self, slot: usize) -> AppResult<&Slot<'a>> {
        self.slot(slot)?.as_ref().ok_or(AppError::EmptySlot(slot))
    }
}

impl fmt::Debug for RemoteControl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<_> = self
            .slots
            .iter()
            .map(|s| s.as_ref().map(|s| (s.on.name(), s.off.name())))
            .collect();
        f.debug_struct("RemoteControl")
            .field("slots", &slots)
            .field("history", &self.history)
            .finish()
    }
}

impl fmt::Display for RemoteControl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------ Remote Control ------")?;
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(s) => writeln!(f, "[slot {i}] {:<20} {}", s.on.name(), s.off.name())?,
                None => writeln!(f, "[slot {i}] <empty>")?,
            }
        }
        write!(f, "[undo] {:?}", self.history.names().last())
    }
}
