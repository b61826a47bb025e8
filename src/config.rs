use crate::{Error, Result};
use log::debug;
use std::{
    collections::HashMap,
    env, fmt,
    path::{Path, PathBuf},
    time::Duration,
};

/// Name of the settings file looked up in the user's home directory
pub const SETTINGS_FILE: &str = ".github-collaborators";

const KEY_USER: &str = "GITHUB_USER";
const KEY_ACCESS_TOKEN: &str = "GITHUB_ACCESS_TOKEN";
const KEY_BASE_URL: &str = "GITHUB_BASE_URL";
const KEY_TIMEOUT: &str = "GITHUB_TIMEOUT_SECS";

const KEYS: [&str; 4] = [KEY_USER, KEY_ACCESS_TOKEN, KEY_BASE_URL, KEY_TIMEOUT];

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials and endpoint settings, loaded once at startup.
///
/// The settings file uses `KEY=VALUE` lines; variables of the same name in the process
/// environment take precedence over the file.
#[derive(Clone)]
pub struct Config {
    user: String,
    access_token: String,
    base_url: Option<String>,
    timeout: Duration,
}

impl Config {
    /// `~/.github-collaborators`, if a home directory can be found
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(SETTINGS_FILE))
    }

    /// Load the config from `path`, or from the default settings file when no path is given.
    ///
    /// An explicitly requested file must exist; the default one may be absent as long as the
    /// environment provides the required keys.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_with(Some(path), true, env::vars()),
            None => Self::load_with(Self::default_path().as_deref(), false, env::vars()),
        }
    }

    // Settings file first, then any of our keys found in `env_vars` on top
    fn load_with<I>(path: Option<&Path>, explicit: bool, env_vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars = HashMap::new();

        if let Some(path) = path {
            match read_settings(path) {
                Ok(file_vars) => vars.extend(file_vars),
                Err(Error::Settings { ref source, .. }) if !explicit && source.not_found() => {
                    debug!("no settings file at {}", path.display());
                }
                Err(e) => return Err(e),
            }
        }

        vars.extend(
            env_vars
                .into_iter()
                .filter(|(key, _)| KEYS.contains(&key.as_str())),
        );

        Self::from_vars(vars)
    }

    /// Build a config from `KEY=VALUE` pairs
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars: HashMap<String, String> = vars.into_iter().collect();

        let user = required(&mut vars, KEY_USER)?;
        let access_token = required(&mut vars, KEY_ACCESS_TOKEN)?;
        let base_url = vars.remove(KEY_BASE_URL).filter(|url| !url.trim().is_empty());

        let timeout = match vars.remove(KEY_TIMEOUT) {
            Some(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(format!(
                        "{} must be a positive whole number of seconds, got `{}`",
                        KEY_TIMEOUT, secs
                    )
                    .into())
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            user,
            access_token,
            base_url,
            timeout,
        })
    }

    /// The GitHub user owning the managed repositories, also used to authenticate
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("user", &self.user)
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn read_settings(path: &Path) -> Result<Vec<(String, String)>> {
    let to_error = |source| Error::Settings {
        path: path.to_owned(),
        source,
    };

    dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_error)
}

fn required(vars: &mut HashMap<String, String>, key: &'static str) -> Result<String> {
    match vars.remove(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("missing required setting `{}`", key).into()),
    }
}

#[cfg(test)]
mod test {
    use super::{read_settings, Config, DEFAULT_TIMEOUT};
    use crate::Error;
    use std::{io::Write, time::Duration};

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_vars() {
        let config = Config::from_vars(vars(&[
            ("GITHUB_USER", "octocat"),
            ("GITHUB_ACCESS_TOKEN", "s3cret"),
            ("GITHUB_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.user(), "octocat");
        assert_eq!(config.access_token(), "s3cret");
        assert_eq!(config.base_url(), None);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(!format!("{:?}", config).contains("s3cret"));
    }

    #[test]
    fn missing_token() {
        let err = Config::from_vars(vars(&[("GITHUB_USER", "octocat")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("GITHUB_ACCESS_TOKEN"));
    }

    #[test]
    fn bad_timeout() {
        let err = Config::from_vars(vars(&[
            ("GITHUB_USER", "octocat"),
            ("GITHUB_ACCESS_TOKEN", "s3cret"),
            ("GITHUB_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# github-collaborators settings").unwrap();
        writeln!(file, "GITHUB_USER=octocat").unwrap();
        writeln!(file, "GITHUB_ACCESS_TOKEN=\"s3cret\"").unwrap();
        writeln!(file, "GITHUB_BASE_URL=https://github.example.com/api/v3").unwrap();

        let config = Config::from_vars(read_settings(file.path()).unwrap()).unwrap();
        assert_eq!(config.user(), "octocat");
        assert_eq!(config.access_token(), "s3cret");
        assert_eq!(config.base_url(), Some("https://github.example.com/api/v3"));
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn explicit_settings_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing"))).unwrap_err();
        assert!(matches!(err, Error::Settings { .. }));
    }

    #[test]
    fn zero_timeout() {
        let err = Config::from_vars(vars(&[
            ("GITHUB_USER", "octocat"),
            ("GITHUB_ACCESS_TOKEN", "s3cret"),
            ("GITHUB_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("GITHUB_TIMEOUT_SECS"));
    }

    #[test]
    fn environment_overrides_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GITHUB_USER=octocat").unwrap();
        writeln!(file, "GITHUB_ACCESS_TOKEN=from-file").unwrap();

        let env = vars(&[
            ("GITHUB_ACCESS_TOKEN", "from-env"),
            ("HOME", "/home/octocat"),
        ]);
        let config = Config::load_with(Some(file.path()), true, env).unwrap();

        assert_eq!(config.user(), "octocat");
        assert_eq!(config.access_token(), "from-env");
    }

    #[test]
    fn missing_default_file_uses_environment() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(".github-collaborators");

        let env = vars(&[
            ("GITHUB_USER", "octocat"),
            ("GITHUB_ACCESS_TOKEN", "s3cret"),
        ]);
        let config = Config::load_with(Some(&missing), false, env).unwrap();
        assert_eq!(config.user(), "octocat");
        assert_eq!(config.access_token(), "s3cret");

        // no settings file and nothing in the environment
        let err = Config::load_with(Some(&missing), false, vars(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::load_with(None, false, vars(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
