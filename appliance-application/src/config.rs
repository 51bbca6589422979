//! 遥控器配置
//!
//! 既可以通过构建器在代码中组装，也可以从 TOML 文本解析：
//!
//! ```
//! use appliance_application::RemoteConfig;
//!
//! let built = RemoteConfig::builder().slots(3).history_limit(16).build();
//! let parsed = RemoteConfig::from_toml_str("slots = 3\nhistory_limit = 16").unwrap();
//! assert_eq!(built, parsed);
//! ```
//!
use crate::error::{AppError, AppResult};
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// 插槽数量，必须大于 0
    #[builder(default = RemoteConfig::DEFAULT_SLOTS)]
    pub slots: usize,
    /// 历史上限；为空表示不限
    pub history_limit: Option<usize>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            slots: Self::DEFAULT_SLOTS,
            history_limit: None,
        }
    }
}

impl RemoteConfig {
    pub const DEFAULT_SLOTS: usize = 7;

    /// 从 TOML 文本解析并校验
    pub fn from_toml_str(s: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.slots == 0 {
            return Err(AppError::Config("slots must be greater than 0".into()));
        }
        if self.history_limit == Some(0) {
            return Err(AppError::Config(
                "history_limit must be greater than 0 when set".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn history_limit(&self) -> Option<NonZeroUsize> {
        self.history_limit.and_then(NonZeroUsize::new)
    }
}
