//! 电器（Appliance）契约
//!
//! 命令只依赖这里声明的两项能力：`on` 与 `off`。
//! 能力校验在编译期完成：命令构造函数要求协作者实现 [`Appliance`]，
//! 不满足契约的对象根本无法传入。
//!
//! ```compile_fail
//! use appliance_domain::Appliance;
//!
//! fn wrap<A: Appliance + ?Sized>(_appliance: &A) {}
//!
//! // 整数不具备开/关能力
//! wrap(&42_i32);
//! ```
//!
use std::any::type_name;
use std::sync::Arc;

/// 可被开/关的协作者
///
/// - 两个操作均无参数、无返回值，唯一可观测的效果是协作者自身的状态变化；
/// - 以 `&self` 接收者声明，便于多个命令同时借用同一电器，
///   实现方自行负责内部可变性；
/// - 与领域层其他契约（如实体）一致，要求 `Send + Sync`，
///   因此基于 `Cell`/`RefCell` 的实现需改用原子量或锁。
pub trait Appliance: Send + Sync {
    /// 打开（激活）
    fn on(&self);

    /// 关闭（停用）
    fn off(&self);

    /// 用于日志与展示的名称，默认取类型名
    fn name(&self) -> &str {
        type_name::<Self>()
    }
}

impl<A> Appliance for &A
where
    A: Appliance + ?Sized,
{
    fn on(&self) {
        (**self).on();
    }

    fn off(&self) {
        (**self).off();
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<A> Appliance for Arc<A>
where
    A: Appliance + ?Sized,
{
    fn on(&self) {
        (**self).on();
    }

    fn off(&self) {
        (**self).off();
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::Appliance;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct Plug {
        powered: AtomicBool,
    }

    impl Appliance for Plug {
        fn on(&self) {
            self.powered.store(true, Ordering::SeqCst);
        }

        fn off(&self) {
            self.powered.store(false, Ordering::SeqCst);
        }
    }

    #[test]
    fn default_name_is_type_name() {
        let plug = Plug::default();
        assert!(plug.name().ends_with("Plug"));
    }

    #[test]
    fn references_and_arcs_forward_to_inner() {
        let plug = Arc::new(Plug::default());

        let by_ref: &Plug = &plug;
        by_ref.on();
        assert!(plug.powered.load(Ordering::SeqCst));

        Appliance::off(&plug);
        assert!(!plug.powered.load(Ordering::SeqCst));

        let dynamic: &dyn Appliance = &*plug;
        dynamic.on();
        assert!(plug.powered.load(Ordering::SeqCst));
    }
}
