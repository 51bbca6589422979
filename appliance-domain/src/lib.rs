//! 电器领域层（appliance-domain）
//!
//! 定义命令所作用的协作者（collaborator）契约与最小必要的领域构件：
//! - 电器契约（`appliance`）：具备“开/关”两项能力的对象抽象；
//! - 电源状态（`power_state`）：可观测的 `On/Off` 值对象；
//! - 参考实现（`light`）：一个可被多个命令共享借用的电灯；
//! - 领域错误（`error`）。
//!
//! 本 crate 不关心命令如何被触发与撤销，仅约束“能被开关的东西”长什么样，
//! 由应用层（`appliance-application`）在其之上编排命令与历史。
//!
pub mod appliance;
pub mod error;
pub mod light;
pub mod power_state;

pub use appliance::Appliance;
pub use light::Light;
pub use power_state::PowerState;
