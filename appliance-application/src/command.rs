/// 应用层命令（Command）
///
/// 封装一次动作及其逆动作，使调用方可以延迟执行并撤销。
/// - `execute` 施加动作，`undo` 施加与之严格相反的动作；
/// - 两者均不返回值，唯一可观测的效果是协作者的状态变化；
/// - 建议保持语义化的“动宾结构”命名，如 `TurnOn`、`TurnOff`。
///
/// `name`：命令的稳定名称，用于日志与展示。避免依赖 `type_name::<T>()`。
/// 以方法而非关联常量提供，使该 trait 可作为 trait object 存入历史。
pub trait Command: Send + Sync {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    fn name(&self) -> &'static str;

    fn execute(&self);

    fn undo(&self);
}
