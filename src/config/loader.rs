use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::Result;
use crate::config::types::{Config, ConfigFile};

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    const CONFIG_FILE: &'static str = "bandwidth.toml";

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut file: ConfigFile = toml::from_str(&content)?;
        for config in file.profiles.values_mut() {
            resolve_config(config);
        }
        Ok(file)
    }

    /// 查找并加载配置文件
    /// 查找顺序：
    /// 1. 当前目录及其父目录
    /// 2. 用户配置目录 ~/.config/bandwidth/
    pub fn find_and_load() -> Option<ConfigFile> {
        let start = std::env::current_dir().ok()?;
        Self::find_from(&start, dirs::home_dir())
    }

    /// 从 `start` 开始向上查找，找不到时再查 `home` 下的用户配置目录
    ///
    /// 无法解析的文件记录警告后跳过，继续按顺序查找
    pub fn find_from(start: &Path, home: Option<PathBuf>) -> Option<ConfigFile> {
        let user_config = home.map(|home| {
            home.join(".config")
                .join("bandwidth")
                .join(Self::CONFIG_FILE)
        });

        start
            .ancestors()
            .map(|dir| dir.join(Self::CONFIG_FILE))
            .chain(user_config)
            .filter(|path| path.is_file())
            .find_map(|path| Self::try_load(&path))
    }

    fn try_load(path: &Path) -> Option<ConfigFile> {
        Self::load_from_path(path)
            .inspect_err(|e| tracing::warn!(path = %path.display(), "skipping config file: {}", e))
            .ok()
    }
}

fn resolve_config(config: &mut Config) {
    for value in [
        &mut config.user_id,
        &mut config.api_token,
        &mut config.api_secret,
        &mut config.base_url,
    ] {
        *value = resolve_env_vars(value);
    }
}

/// 解析并替换系统环境变量 ${VAR}，未定义的变量保持原样
pub fn resolve_env_vars(text: &str) -> String {
    resolve_with(text, |name| std::env::var(name).ok())
}

fn resolve_with<F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    static ENV_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = ENV_REGEX.get_or_init(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap());

    re.replace_all(text, |caps: &Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    })
    .to_string()
}
